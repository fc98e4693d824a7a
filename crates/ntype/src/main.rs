//! Ntype - native datatype model for a Python-to-native transpiler
//!
//! Usage: ntype [OPTIONS] <COMMAND>

use anyhow::{Context, bail};
use clap::{Parser as ClapParser, Subcommand};
use native_types::DiagnosticReporter;
use native_types::driver::{self, CheckConfig, CheckContext};
use native_types::types::{precision_aliases, precision_of};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "ntype")]
#[command(author = "Ntype Developers")]
#[command(version)]
#[command(about = "Inspect native datatypes and check type-hint files", long_about = None)]
struct Args {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve an alias to its canonical datatype
    Resolve {
        /// Alias such as int, bool_, str or *
        alias: String,
    },

    /// Show the category and byte width of a numeric alias
    Precision {
        /// Alias such as float32 or int64; lists every alias when omitted
        alias: Option<String>,
    },

    /// List the fixed datatype kinds
    Kinds,

    /// Check a type-hint declaration file
    Check {
        /// Annotation file (.nty)
        #[arg(required = true)]
        input: PathBuf,

        /// Dump tokens (for debugging)
        #[arg(long)]
        dump_tokens: bool,

        /// Dump AST (for debugging)
        #[arg(long)]
        dump_ast: bool,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    match &args.command {
        Command::Resolve { alias } => {
            let line = driver::describe_alias(alias)
                .with_context(|| format!("cannot resolve '{alias}'"))?;
            println!("{line}");
        }

        Command::Precision { alias: Some(alias) } => {
            let precision = precision_of(alias)?;
            println!("{} {}", precision.category, precision.width);
        }

        Command::Precision { alias: None } => {
            for (alias, precision) in precision_aliases() {
                println!("{alias:<14} {precision}");
            }
        }

        Command::Kinds => {
            for line in driver::describe_kinds() {
                println!("{line}");
            }
        }

        Command::Check { input, dump_tokens, dump_ast } => {
            check_file(input, *dump_tokens, *dump_ast, args.verbose)?;
        }
    }

    Ok(())
}

fn check_file(input: &Path, dump_tokens: bool, dump_ast: bool, verbose: bool) -> anyhow::Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("cannot read {}", input.display()))?;
    let filename = input.display().to_string();

    // Set up diagnostic reporter
    let mut reporter = DiagnosticReporter::new();
    let file_id = reporter.add_file(&filename, &source);

    let config = CheckConfig {
        dump_tokens,
        dump_ast,
        verbose,
    };
    let ctx = CheckContext::new(filename.clone(), file_id, &reporter);

    // Diagnostics were already rendered by the reporter
    let Ok(bindings) = driver::check_source(&source, &ctx, &config) else {
        bail!("could not check {filename}");
    };

    for binding in &bindings {
        println!("{}", driver::describe_binding(binding));
    }

    if verbose {
        eprintln!("Checked {} declarations in {}", bindings.len(), filename);
    }

    Ok(())
}
