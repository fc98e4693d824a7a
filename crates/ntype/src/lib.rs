//! Ntype - native datatype model for a Python-to-native transpiler
//!
//! This library provides the datatype tags a code generator consults when
//! lowering annotated Python to native code.
//!
//! ## Architecture
//!
//! The crate is organized into:
//! - **Types** (`types/`): Fixed-kind singletons, signatures, custom types,
//!   precision registry, resolution and classification
//! - **Annotate** (`annotate/`): Lexer, parser and checker for type-hint files
//! - **Driver** (`driver/`): Checking pipeline and report formatting
//! - **Common** (`common/`): Shared infrastructure (errors, spans)

pub mod common;
pub mod types;
pub mod annotate;
pub mod driver;

// Re-exports for convenience
pub use common::{DiagnosticReporter, Span, TypeError, TypeResult};
pub use types::{
    CustomType, CustomTypeOptions, DataType, FunctionType, NativeType, NativeValue, Precision,
    VariableType, datatype, default_value, is_custom_type, is_iterable, make_custom_type,
    precision_of, supports_with_construct,
};
