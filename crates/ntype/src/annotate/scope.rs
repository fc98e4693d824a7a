//! Names declared by an annotation file

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use crate::types::{CustomType, DataType, Precision, UnionType};

/// Resolved type of a hint
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    Data {
        /// Borrowed for fixed kinds, so the singleton's identity survives
        ty: Cow<'static, DataType>,
        /// Explicit or default machine width, for numeric kinds
        precision: Option<Precision>,
    },
    Union(UnionType),
}

impl Annotation {
    pub fn data(ty: DataType, precision: Option<Precision>) -> Self {
        Self::Data {
            ty: Cow::Owned(ty),
            precision,
        }
    }

    /// Annotation for a fixed-kind singleton
    pub fn canonical(ty: &'static DataType, precision: Option<Precision>) -> Self {
        Self::Data {
            ty: Cow::Borrowed(ty),
            precision,
        }
    }

    pub fn datatype(&self) -> Option<&DataType> {
        match self {
            Annotation::Data { ty, .. } => Some(ty.as_ref()),
            Annotation::Union(_) => None,
        }
    }

    pub fn precision(&self) -> Option<Precision> {
        match self {
            Annotation::Data { precision, .. } => *precision,
            Annotation::Union(_) => None,
        }
    }
}

/// A declared type name
#[derive(Debug, Clone)]
pub enum TypeSymbol {
    /// `type NAME = hint`
    Alias(Annotation),
    /// `class NAMEClass(...)`, registered under the stripped name
    Class(Arc<CustomType>),
}

/// Type names and annotated symbols of one file
#[derive(Debug, Default)]
pub struct Scope {
    types: HashMap<String, TypeSymbol>,
    symbols: HashMap<String, Annotation>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define_type(&mut self, name: &str, symbol: TypeSymbol) -> Result<(), String> {
        if self.types.contains_key(name) {
            return Err(name.to_string());
        }
        self.types.insert(name.to_string(), symbol);
        Ok(())
    }

    pub fn define_symbol(&mut self, name: &str, annotation: Annotation) -> Result<(), String> {
        if self.symbols.contains_key(name) {
            return Err(name.to_string());
        }
        self.symbols.insert(name.to_string(), annotation);
        Ok(())
    }

    pub fn lookup_type(&self, name: &str) -> Option<&TypeSymbol> {
        self.types.get(name)
    }
}
