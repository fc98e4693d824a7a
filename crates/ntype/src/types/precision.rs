//! Precision registry
//!
//! Maps numeric type-name spellings (numpy, Python builtins, C) to a
//! category and a width in bytes.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use super::datatype::{DataType, NativeType};
use crate::common::{TypeError, TypeResult};

/// Numeric category of a precision entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Real,
    Int,
    Bool,
    Complex,
}

impl Category {
    /// Parse a default-precision key
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "real" | "float" => Some(Category::Real),
            "int" | "integer" => Some(Category::Int),
            "bool" => Some(Category::Bool),
            "complex" => Some(Category::Complex),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Real => "real",
            Category::Int => "int",
            Category::Bool => "bool",
            Category::Complex => "complex",
        }
    }

    /// Fixed kind carrying values of this category
    pub fn native_type(self) -> NativeType {
        match self {
            Category::Real => NativeType::Real,
            Category::Int => NativeType::Integer,
            Category::Bool => NativeType::Bool,
            Category::Complex => NativeType::Complex,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_REAL_WIDTH: u8 = 8;
pub const DEFAULT_COMPLEX_WIDTH: u8 = 8;
pub const DEFAULT_BOOL_WIDTH: u8 = 4;
/// Alignment of the platform's native integer
pub const DEFAULT_INT_WIDTH: u8 = std::mem::align_of::<isize>() as u8;

/// Default width in bytes for a category
pub const fn default_width(category: Category) -> u8 {
    match category {
        Category::Real => DEFAULT_REAL_WIDTH,
        Category::Int => DEFAULT_INT_WIDTH,
        Category::Bool => DEFAULT_BOOL_WIDTH,
        Category::Complex => DEFAULT_COMPLEX_WIDTH,
    }
}

/// Category and byte width of a concrete machine representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision {
    pub category: Category,
    /// Width in bytes
    pub width: u8,
}

impl Precision {
    pub const fn new(category: Category, width: u8) -> Self {
        Self { category, width }
    }

    pub const fn default_for(category: Category) -> Self {
        Self::new(category, default_width(category))
    }

    pub fn is_default(&self) -> bool {
        self.width == default_width(self.category)
    }

    /// Canonical singleton for the category
    pub fn datatype(&self) -> &'static DataType {
        self.category.native_type().instance()
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.category, self.width)
    }
}

static PRECISION_REGISTRY: LazyLock<HashMap<&'static str, Precision>> = LazyLock::new(|| {
    let real = Precision::default_for(Category::Real);
    let int = Precision::default_for(Category::Int);
    let boolean = Precision::default_for(Category::Bool);
    let complex = Precision::default_for(Category::Complex);

    HashMap::from([
        ("real", real),
        ("double", real),
        ("float", real),
        ("pythonfloat", real),
        ("float32", Precision::new(Category::Real, 4)),
        ("float64", Precision::new(Category::Real, 8)),
        ("pythoncomplex", complex),
        ("complex", complex),
        ("complex64", Precision::new(Category::Complex, 4)),
        ("complex128", Precision::new(Category::Complex, 8)),
        ("int8", Precision::new(Category::Int, 1)),
        ("int16", Precision::new(Category::Int, 2)),
        ("int32", Precision::new(Category::Int, 4)),
        ("int64", Precision::new(Category::Int, 8)),
        ("int", int),
        // numba spells these with a trailing underscore
        ("int_", int),
        ("pythonint", int),
        ("integer", int),
        ("bool", boolean),
        ("bool_", boolean),
        ("pythonbool", boolean),
    ])
});

/// Look up the precision registered for a type-name alias
pub fn precision_of(alias: &str) -> TypeResult<Precision> {
    PRECISION_REGISTRY
        .get(alias.to_lowercase().as_str())
        .copied()
        .ok_or_else(|| TypeError::UnknownPrecisionAlias(alias.to_string()))
}

/// Every registered alias with its precision, sorted by alias
pub fn precision_aliases() -> Vec<(&'static str, Precision)> {
    let mut entries: Vec<_> = PRECISION_REGISTRY.iter().map(|(k, v)| (*k, *v)).collect();
    entries.sort_by_key(|(alias, _)| *alias);
    entries
}
