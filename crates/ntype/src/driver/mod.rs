//! Checking pipeline and report formatting

use std::fmt::Write as _;

use crate::annotate::{Annotation, Binding, BindingKind, Checker, Lexer, Parser};
use crate::common::{DiagnosticReporter, TypeError, TypeResult};
use crate::types::{
    DataType, NativeType, aliases_of, datatype, default_value, is_custom_type, is_iterable,
    is_polymorphic, precision_of, supports_with_construct,
};

/// Options for checking an annotation file
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    pub dump_tokens: bool,
    pub dump_ast: bool,
    pub verbose: bool,
}

/// Source file being checked and where its diagnostics go
pub struct CheckContext<'a> {
    pub filename: String,
    pub file_id: usize,
    pub reporter: &'a DiagnosticReporter,
}

impl<'a> CheckContext<'a> {
    pub fn new(filename: String, file_id: usize, reporter: &'a DiagnosticReporter) -> Self {
        Self { filename, file_id, reporter }
    }
}

/// Lex, parse and check an annotation file
///
/// Errors are rendered through the context's reporter before being returned.
pub fn check_source(
    source: &str,
    ctx: &CheckContext,
    config: &CheckConfig,
) -> TypeResult<Vec<Binding>> {
    let report = |e: TypeError| {
        ctx.reporter.report_error(ctx.file_id, &e);
        e
    };

    // Phase 1: Lexing (optional token dump)
    if config.dump_tokens {
        let tokens = Lexer::new(source).tokenize_all().map_err(report)?;
        eprintln!("=== Tokens ===");
        for token in &tokens {
            eprintln!("{:?}", token);
        }
        eprintln!("=== End Tokens ===\n");
    }

    // Phase 2: Parsing
    if config.verbose {
        eprintln!("Parsing {}...", ctx.filename);
    }

    let file = Parser::new(source)
        .and_then(|mut parser| parser.parse())
        .map_err(report)?;

    if config.dump_ast {
        eprintln!("=== AST ===");
        eprintln!("{:#?}", file);
        eprintln!("=== End AST ===\n");
    }

    // Phase 3: Checking
    if config.verbose {
        eprintln!("Checking {} declarations...", file.decls.len());
    }

    Checker::new().check(&file).map_err(report)
}

/// Capability flags the code generator would act on
pub fn classification(ty: &DataType) -> Vec<&'static str> {
    let mut flags = Vec::new();
    if is_custom_type(ty) {
        flags.push("custom");
    }
    if is_iterable(ty) {
        flags.push("iterable");
    }
    if supports_with_construct(ty) {
        flags.push("with");
    }
    if is_polymorphic(ty) {
        flags.push("polymorphic");
    }
    flags
}

fn push_flags(out: &mut String, ty: &DataType) {
    let flags = classification(ty);
    if !flags.is_empty() {
        let _ = write!(out, " {{{}}}", flags.join(", "));
    }
}

pub fn describe_annotation(annotation: &Annotation) -> String {
    match annotation {
        Annotation::Data { ty, precision } => {
            let mut out = ty.to_string();
            if let Some(precision) = precision {
                let _ = write!(out, " [{precision}]");
            }
            push_flags(&mut out, ty.as_ref());
            out
        }
        Annotation::Union(union) => union.to_string(),
    }
}

/// One report line per checked declaration
pub fn describe_binding(binding: &Binding) -> String {
    match &binding.kind {
        BindingKind::Class(custom) => {
            let mut out = format!(
                "class {} ({}) args=[{}]",
                custom,
                custom.class_name(),
                custom.argnames().join(", ")
            );
            if let Some(base) = custom.base() {
                let _ = write!(out, " base={base}");
            }
            push_flags(&mut out, &custom.datatype());
            out
        }
        BindingKind::Alias(annotation) => {
            format!("type {} = {}", binding.name, describe_annotation(annotation))
        }
        BindingKind::Symbol(annotation) => {
            format!("let {}: {}", binding.name, describe_annotation(annotation))
        }
    }
}

/// Resolve an alias and describe the singleton it names
pub fn describe_alias(alias: &str) -> TypeResult<String> {
    let ty = datatype(alias)?;

    let precision = match precision_of(alias) {
        Ok(precision) => Some(precision),
        Err(TypeError::UnknownPrecisionAlias(_)) => ty.as_native().and_then(NativeType::default_precision),
        Err(other) => return Err(other),
    };

    let mut out = ty.to_string();
    if let Some(precision) = precision {
        let _ = write!(out, " [{precision}]");
    }
    if let Ok(value) = default_value(ty) {
        let _ = write!(out, " default={value}");
    }
    push_flags(&mut out, ty);
    Ok(out)
}

/// Table of fixed kinds with the aliases that resolve to them
pub fn describe_kinds() -> Vec<String> {
    NativeType::ALL
        .into_iter()
        .map(|kind| {
            let aliases = aliases_of(kind);
            let aliases = if aliases.is_empty() {
                "(not resolvable)".to_string()
            } else {
                aliases.join(", ")
            };
            let mut line = format!("{:<14} {}", kind.to_string(), aliases);
            push_flags(&mut line, kind.instance());
            line
        })
        .collect()
}
