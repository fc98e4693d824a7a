//! Parametric datatypes built from other datatypes

use std::fmt;

use super::datatype::DataType;
use crate::common::{TypeError, TypeResult};

/// A typedef-like binding of `alias` to an existing datatype
#[derive(Debug, Clone, PartialEq)]
pub struct VariableType {
    rhs: Box<DataType>,
    alias: String,
}

impl VariableType {
    pub fn new(rhs: DataType, alias: impl Into<String>) -> Self {
        Self {
            rhs: Box::new(rhs),
            alias: alias.into(),
        }
    }

    /// Name of the aliased type
    pub fn name(&self) -> &str {
        self.rhs.name()
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn rhs(&self) -> &DataType {
        &self.rhs
    }
}

impl From<VariableType> for DataType {
    fn from(var: VariableType) -> Self {
        DataType::Variable(var)
    }
}

/// Arrow signature: the first entry is the domain, the rest the codomain
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    domains: Vec<DataType>,
    name: String,
}

impl FunctionType {
    pub fn new(domains: Vec<DataType>) -> TypeResult<Self> {
        if domains.is_empty() {
            return Err(TypeError::EmptySignature);
        }
        let name = join(&domains, " -> ");
        Ok(Self { domains, name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &DataType {
        &self.domains[0]
    }

    pub fn codomain(&self) -> &[DataType] {
        &self.domains[1..]
    }

    pub fn domains(&self) -> &[DataType] {
        &self.domains
    }
}

impl From<FunctionType> for DataType {
    fn from(func: FunctionType) -> Self {
        DataType::Function(func)
    }
}

/// One of several datatypes
///
/// Unions annotate symbols but are not datatype tags themselves; the
/// resolution facade rejects them.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionType {
    members: Vec<DataType>,
}

impl UnionType {
    pub fn new(members: Vec<DataType>) -> TypeResult<Self> {
        if members.is_empty() {
            return Err(TypeError::EmptySignature);
        }
        Ok(Self { members })
    }

    pub fn members(&self) -> &[DataType] {
        &self.members
    }

    pub fn contains(&self, ty: &DataType) -> bool {
        self.members.iter().any(|m| m == ty)
    }
}

impl fmt::Display for UnionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join(&self.members, " | "))
    }
}

fn join(types: &[DataType], sep: &str) -> String {
    types.iter().map(ToString::to_string).collect::<Vec<_>>().join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NativeType;
    use pretty_assertions::assert_eq;

    fn native(kind: NativeType) -> DataType {
        kind.instance().clone()
    }

    #[test]
    fn test_function_domain_and_codomain() {
        let f = FunctionType::new(vec![
            native(NativeType::Integer),
            native(NativeType::Real),
            native(NativeType::Bool),
        ])
        .unwrap();

        assert_eq!(f.domain(), NativeType::Integer.instance());
        assert_eq!(f.codomain(), &[native(NativeType::Real), native(NativeType::Bool)]);
        assert_eq!(f.name(), "integer -> real -> bool");
    }

    #[test]
    fn test_function_single_domain_has_empty_codomain() {
        let f = FunctionType::new(vec![native(NativeType::Void)]).unwrap();
        assert_eq!(f.domain(), NativeType::Void.instance());
        assert!(f.codomain().is_empty());
        assert_eq!(DataType::from(f).to_string(), "void");
    }

    #[test]
    fn test_function_requires_a_domain() {
        assert!(matches!(FunctionType::new(Vec::new()), Err(TypeError::EmptySignature)));
    }

    #[test]
    fn test_variable_inherits_name() {
        let var = VariableType::new(native(NativeType::Complex), "zz");
        assert_eq!(var.name(), "Complex");
        assert_eq!(var.alias(), "zz");
        assert_eq!(var.rhs(), NativeType::Complex.instance());
    }

    #[test]
    fn test_union_display_and_membership() {
        let u = UnionType::new(vec![native(NativeType::Integer), native(NativeType::Real)]).unwrap();
        assert_eq!(u.to_string(), "integer | real");
        assert!(u.contains(NativeType::Real.instance()));
        assert!(!u.contains(NativeType::Bool.instance()));
        assert!(matches!(UnionType::new(Vec::new()), Err(TypeError::EmptySignature)));
    }
}
