//! Values carried by native datatypes

use std::fmt;

use super::datatype::DataType;

/// A constant of a native type, used for zero values and custom-type attributes
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    Bool(bool),
    Int(i64),
    Real(f64),
    Complex { re: f64, im: f64 },
    Str(String),
    Type(DataType),
}

impl NativeValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            NativeValue::Bool(_) => "bool",
            NativeValue::Int(_) => "int",
            NativeValue::Real(_) => "real",
            NativeValue::Complex { .. } => "complex",
            NativeValue::Str(_) => "str",
            NativeValue::Type(_) => "datatype",
        }
    }
}

impl fmt::Display for NativeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeValue::Bool(b) => write!(f, "{b}"),
            NativeValue::Int(i) => write!(f, "{i}"),
            NativeValue::Real(r) => write!(f, "{r:?}"),
            NativeValue::Complex { re, im } => write!(f, "{re:?}+{im:?}j"),
            NativeValue::Str(s) => write!(f, "{s:?}"),
            NativeValue::Type(t) => write!(f, "{t}"),
        }
    }
}

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        NativeValue::Bool(value)
    }
}

impl From<i64> for NativeValue {
    fn from(value: i64) -> Self {
        NativeValue::Int(value)
    }
}

impl From<f64> for NativeValue {
    fn from(value: f64) -> Self {
        NativeValue::Real(value)
    }
}

impl From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        NativeValue::Str(value.to_string())
    }
}

impl From<DataType> for NativeValue {
    fn from(value: DataType) -> Self {
        NativeValue::Type(value)
    }
}
