//! Classification queries used by the code generator to pick a lowering

use super::datatype::{DataType, NativeType};
use super::value::NativeValue;
use crate::common::{TypeError, TypeResult};

/// Was `ty` produced by the custom type factory?
pub fn is_custom_type(ty: &DataType) -> bool {
    matches!(ty, DataType::Custom(_))
}

/// Can a loop iterate over values of `ty`?
///
/// A custom type answers with its own flag whatever its base kind is.
pub fn is_iterable(ty: &DataType) -> bool {
    match ty {
        DataType::Custom(custom) => custom.is_iterable(),
        DataType::Native(kind) => kind.is_range() || *kind == NativeType::Tensor,
        _ => false,
    }
}

/// Does `ty` support a scoped enter/exit block?
pub fn supports_with_construct(ty: &DataType) -> bool {
    match ty {
        DataType::Custom(custom) => custom.is_with_construct(),
        _ => false,
    }
}

/// Does `ty` need polymorphic dispatch?
pub fn is_polymorphic(ty: &DataType) -> bool {
    match ty {
        DataType::Custom(custom) => custom.is_polymorphic(),
        _ => false,
    }
}

/// Zero value of a numeric or boolean kind
pub fn default_value(ty: &DataType) -> TypeResult<NativeValue> {
    match ty.as_native() {
        Some(NativeType::Integer) => Ok(NativeValue::Int(0)),
        Some(NativeType::Real) => Ok(NativeValue::Real(0.0)),
        Some(NativeType::Complex) => Ok(NativeValue::Complex { re: 0.0, im: 0.0 }),
        Some(NativeType::Bool) => Ok(NativeValue::Bool(false)),
        _ => Err(TypeError::NoDefaultValue(ty.to_string())),
    }
}
