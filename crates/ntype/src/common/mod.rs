//! Common infrastructure shared by the type model and the annotation front end

mod error;
mod span;

pub use error::{DiagnosticReporter, TypeError, TypeResult};
pub use span::Span;
