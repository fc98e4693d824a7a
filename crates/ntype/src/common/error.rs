//! Error types and diagnostic reporting

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream, WriteColor};
use thiserror::Error;
use super::Span;

/// Errors raised by the datatype model and the annotation front end
#[derive(Error, Debug)]
pub enum TypeError {
    #[error("unrecognized datatype '{0}'")]
    UnrecognizedDataType(String),

    #[error("unknown precision alias '{0}'")]
    UnknownPrecisionAlias(String),

    #[error("argument '{key}' not valid for {type_name}")]
    InvalidAttribute { key: String, type_name: String },

    #[error("invalid custom type name '{0}': expected a name ending in 'Class'")]
    InvalidTypeName(String),

    #[error("no default value for datatype '{0}'")]
    NoDefaultValue(String),

    #[error("expecting a datatype or alias, found {0}")]
    InvalidArgumentType(String),

    #[error("type signature needs at least one member")]
    EmptySignature,

    #[error("'{0}' is already defined")]
    Redefinition(String),

    #[error("Lexer error at {span:?}: {message}")]
    Lexer { message: String, span: Span },

    #[error("Parser error at {span:?}: {message}")]
    Parser { message: String, span: Span },

    #[error("{source}")]
    Annotation { source: Box<TypeError>, span: Span },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TypeError {
    pub fn unrecognized(alias: impl Into<String>) -> Self {
        Self::UnrecognizedDataType(alias.into())
    }

    pub fn lexer(message: impl Into<String>, span: Span) -> Self {
        Self::Lexer {
            message: message.into(),
            span,
        }
    }

    pub fn parser(message: impl Into<String>, span: Span) -> Self {
        Self::Parser {
            message: message.into(),
            span,
        }
    }

    /// Attach a source location to a model error raised while checking a hint
    pub fn at(self, span: Span) -> Self {
        match self {
            located @ (Self::Lexer { .. } | Self::Parser { .. } | Self::Annotation { .. }) => located,
            other => Self::Annotation {
                source: Box::new(other),
                span,
            },
        }
    }

    /// Source location, if the error came out of an annotation file
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Lexer { span, .. } | Self::Parser { span, .. } | Self::Annotation { span, .. } => {
                Some(*span)
            }
            _ => None,
        }
    }

    /// Strip the source location and return the underlying model error
    pub fn root(&self) -> &TypeError {
        match self {
            Self::Annotation { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type TypeResult<T> = Result<T, TypeError>;

/// Diagnostic reporter for pretty error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    pub fn diagnostic(&self, file_id: usize, error: &TypeError) -> Diagnostic<usize> {
        match error {
            TypeError::Lexer { message, span } => Diagnostic::error()
                .with_message("Lexer error")
                .with_labels(vec![
                    Label::primary(file_id, span.start..span.end).with_message(message)
                ]),

            TypeError::Parser { message, span } => Diagnostic::error()
                .with_message("Syntax error")
                .with_labels(vec![
                    Label::primary(file_id, span.start..span.end).with_message(message)
                ]),

            TypeError::Annotation { source, span } => Diagnostic::error()
                .with_message("Type error")
                .with_labels(vec![
                    Label::primary(file_id, span.start..span.end).with_message(source.to_string())
                ]),

            other => Diagnostic::error().with_message(other.to_string()),
        }
    }

    /// Render an error to stderr
    pub fn report_error(&self, file_id: usize, error: &TypeError) {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        self.emit(&mut writer.lock(), file_id, error);
    }

    /// Render an error into any colour-aware writer
    pub fn emit(&self, writer: &mut dyn WriteColor, file_id: usize, error: &TypeError) {
        let diagnostic = self.diagnostic(file_id, error);
        let _ = term::emit(writer, &self.config, &self.files, &diagnostic);
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codespan_reporting::term::termcolor::NoColor;

    #[test]
    fn test_at_wraps_model_errors_once() {
        let err = TypeError::unrecognized("quaternion").at(Span::new(4, 14));
        assert_eq!(err.span(), Some(Span::new(4, 14)));
        assert!(matches!(err.root(), TypeError::UnrecognizedDataType(a) if a == "quaternion"));

        let rewrapped = err.at(Span::new(0, 1));
        assert_eq!(rewrapped.span(), Some(Span::new(4, 14)));
    }

    #[test]
    fn test_report_renders_label() {
        let mut reporter = DiagnosticReporter::new();
        let file_id = reporter.add_file("hints.nty", "let q: quaternion\n");
        let err = TypeError::unrecognized("quaternion").at(Span::new(7, 17));

        let mut out = NoColor::new(Vec::new());
        reporter.emit(&mut out, file_id, &err);
        let text = String::from_utf8(out.into_inner()).unwrap();

        assert!(text.contains("Type error"));
        assert!(text.contains("unrecognized datatype 'quaternion'"));
        assert!(text.contains("hints.nty"));
    }
}
