//! Datatype tags and the fixed-kind singletons
//!
//! Every fixed kind has exactly one live [`DataType`] for the whole process,
//! stored in a static table. Code that needs a canonical tag borrows it with
//! [`NativeType::instance`]; callers may compare such borrows by address.

use std::fmt;
use std::sync::Arc;

use super::composite::{FunctionType, VariableType};
use super::custom::CustomType;
use super::precision::{Category, Precision, default_width};

/// The closed set of built-in native kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NativeType {
    Bool,
    Integer,
    Real,
    Complex,
    String,
    Void,
    Nil,
    Tuple,
    Range,
    /// Range whose iterations may run concurrently
    ParallelRange,
    Tensor,
    Symbol,
    Generic,
}

impl NativeType {
    pub const ALL: [NativeType; 13] = [
        NativeType::Bool,
        NativeType::Integer,
        NativeType::Real,
        NativeType::Complex,
        NativeType::String,
        NativeType::Void,
        NativeType::Nil,
        NativeType::Tuple,
        NativeType::Range,
        NativeType::ParallelRange,
        NativeType::Tensor,
        NativeType::Symbol,
        NativeType::Generic,
    ];

    /// Display name of the kind
    pub const fn name(self) -> &'static str {
        match self {
            NativeType::Bool => "Bool",
            NativeType::Integer => "Integer",
            NativeType::Real => "Real",
            NativeType::Complex => "Complex",
            NativeType::String => "String",
            NativeType::Void => "Void",
            NativeType::Nil => "Nil",
            NativeType::Tuple => "Tuple",
            NativeType::Range => "Range",
            NativeType::ParallelRange => "ParallelRange",
            NativeType::Tensor => "Tensor",
            NativeType::Symbol => "Symbol",
            NativeType::Generic => "Generic",
        }
    }

    /// Find a kind by display name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// The process-wide singleton tag for this kind
    pub fn instance(self) -> &'static DataType {
        &NATIVE_TYPES[self as usize]
    }

    /// Range and its parallel specialization
    pub fn is_range(self) -> bool {
        matches!(self, NativeType::Range | NativeType::ParallelRange)
    }

    /// Precision category for the numeric kinds
    pub fn category(self) -> Option<Category> {
        match self {
            NativeType::Bool => Some(Category::Bool),
            NativeType::Integer => Some(Category::Int),
            NativeType::Real => Some(Category::Real),
            NativeType::Complex => Some(Category::Complex),
            _ => None,
        }
    }

    /// Default machine representation, for kinds that have one
    pub fn default_precision(self) -> Option<Precision> {
        self.category().map(|category| Precision::new(category, default_width(category)))
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name().to_lowercase())
    }
}

// Indexed by `NativeType as usize`; order must follow the enum declaration.
static NATIVE_TYPES: [DataType; 13] = [
    DataType::Native(NativeType::Bool),
    DataType::Native(NativeType::Integer),
    DataType::Native(NativeType::Real),
    DataType::Native(NativeType::Complex),
    DataType::Native(NativeType::String),
    DataType::Native(NativeType::Void),
    DataType::Native(NativeType::Nil),
    DataType::Native(NativeType::Tuple),
    DataType::Native(NativeType::Range),
    DataType::Native(NativeType::ParallelRange),
    DataType::Native(NativeType::Tensor),
    DataType::Native(NativeType::Symbol),
    DataType::Native(NativeType::Generic),
];

/// A native datatype tag consulted by the code generator
#[derive(Debug, Clone)]
pub enum DataType {
    /// One of the fixed kinds
    Native(NativeType),
    /// Alias bound to an existing type
    Variable(VariableType),
    /// Arrow signature
    Function(FunctionType),
    /// Nominal type produced by the custom type factory
    Custom(Arc<CustomType>),
}

impl DataType {
    /// Canonical display name; also the case-insensitive lookup key
    pub fn name(&self) -> &str {
        match self {
            DataType::Native(kind) => kind.name(),
            DataType::Variable(var) => var.name(),
            DataType::Function(func) => func.name(),
            DataType::Custom(custom) => custom.name(),
        }
    }

    pub fn as_native(&self) -> Option<NativeType> {
        match self {
            DataType::Native(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn as_custom(&self) -> Option<&Arc<CustomType>> {
        match self {
            DataType::Custom(custom) => Some(custom),
            _ => None,
        }
    }

    /// Is this the canonical singleton for its kind?
    pub fn is_singleton(&self) -> bool {
        self.as_native()
            .is_some_and(|kind| std::ptr::eq(self, kind.instance()))
    }
}

impl PartialEq for DataType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DataType::Native(a), DataType::Native(b)) => a == b,
            (DataType::Variable(a), DataType::Variable(b)) => a == b,
            (DataType::Function(a), DataType::Function(b)) => a == b,
            // Custom types are nominal: only the same generated type is equal
            (DataType::Custom(a), DataType::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<NativeType> for DataType {
    fn from(kind: NativeType) -> Self {
        DataType::Native(kind)
    }
}

impl From<Arc<CustomType>> for DataType {
    fn from(custom: Arc<CustomType>) -> Self {
        DataType::Custom(custom)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name().to_lowercase())
    }
}
