//! Native datatype model
//!
//! Datatype tags consulted by the code generator: the fixed-kind singletons,
//! alias and function signatures, custom types generated for user classes,
//! the precision registry and the classification queries.

mod classify;
mod composite;
mod custom;
mod datatype;
mod precision;
mod resolve;
mod value;

pub use classify::{default_value, is_custom_type, is_iterable, is_polymorphic, supports_with_construct};
pub use composite::{FunctionType, UnionType, VariableType};
pub use custom::{CLASS_SUFFIX, CustomType, CustomTypeOptions, CustomValue, PROJECT_TAG, make_custom_type};
pub use datatype::{DataType, NativeType};
pub use precision::{
    Category, DEFAULT_BOOL_WIDTH, DEFAULT_COMPLEX_WIDTH, DEFAULT_INT_WIDTH, DEFAULT_REAL_WIDTH,
    Precision, default_width, precision_aliases, precision_of,
};
pub use resolve::{TypeArg, aliases_of, datatype, is_registered};
pub use value::NativeValue;
