//! Datatype resolution
//!
//! [`datatype`] is the single entry point that maps a type alias, or an
//! existing datatype tag, to the canonical singleton of its kind.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::composite::UnionType;
use super::datatype::{DataType, NativeType};
use super::value::NativeValue;
use crate::annotate::{Hint, HintKind};
use crate::common::{TypeError, TypeResult};

static DTYPE_REGISTRY: LazyLock<HashMap<&'static str, NativeType>> = LazyLock::new(|| {
    HashMap::from([
        ("bool", NativeType::Bool),
        // numba spells these with a trailing underscore
        ("bool_", NativeType::Bool),
        ("int", NativeType::Integer),
        ("int_", NativeType::Integer),
        ("integer", NativeType::Integer),
        ("real", NativeType::Real),
        ("complex", NativeType::Complex),
        ("void", NativeType::Void),
        ("nil", NativeType::Nil),
        ("symbol", NativeType::Symbol),
        ("*", NativeType::Generic),
        ("generic", NativeType::Generic),
        ("str", NativeType::String),
        ("string", NativeType::String),
    ])
});

/// Anything a caller may ask [`datatype`] to resolve
#[derive(Debug, Clone, Copy)]
pub enum TypeArg<'a> {
    Alias(&'a str),
    DataType(&'a DataType),
    /// Hint expression read from an annotation file
    Expr(&'a Hint),
    Union(&'a UnionType),
    Value(&'a NativeValue),
}

impl<'a> From<&'a str> for TypeArg<'a> {
    fn from(alias: &'a str) -> Self {
        TypeArg::Alias(alias)
    }
}

impl<'a> From<&'a String> for TypeArg<'a> {
    fn from(alias: &'a String) -> Self {
        TypeArg::Alias(alias)
    }
}

impl<'a> From<&'a DataType> for TypeArg<'a> {
    fn from(ty: &'a DataType) -> Self {
        TypeArg::DataType(ty)
    }
}

impl<'a> From<&'a Hint> for TypeArg<'a> {
    fn from(hint: &'a Hint) -> Self {
        TypeArg::Expr(hint)
    }
}

impl<'a> From<&'a UnionType> for TypeArg<'a> {
    fn from(union: &'a UnionType) -> Self {
        TypeArg::Union(union)
    }
}

impl<'a> From<&'a NativeValue> for TypeArg<'a> {
    fn from(value: &'a NativeValue) -> Self {
        TypeArg::Value(value)
    }
}

/// Return the canonical singleton for an alias or datatype
///
/// Aliases are matched case-insensitively. A datatype is resolved again
/// through its lower-cased name, so only the singletons of the registry are
/// ever returned. A variable type resolves to the kind it aliases. Tuples,
/// ranges and tensors have no alias and are rejected, as are signatures and
/// custom types unless their name happens to be an alias (a one-element
/// signature `int` or a custom `IntClass` both resolve to Integer).
///
/// A bare name or `*` hint resolves like an alias; arrows and unions are not
/// single datatypes.
pub fn datatype<'a>(arg: impl Into<TypeArg<'a>>) -> TypeResult<&'static DataType> {
    match arg.into() {
        TypeArg::Alias(alias) => lookup(alias),
        TypeArg::DataType(ty) => lookup(ty.name()),
        TypeArg::Expr(hint) => match &hint.kind {
            HintKind::Name(name) => lookup(name),
            HintKind::Generic => lookup("*"),
            HintKind::Arrow(_) | HintKind::Union(_) => {
                Err(TypeError::InvalidArgumentType(format!("composite hint '{hint}'")))
            }
        },
        TypeArg::Union(union) => Err(TypeError::InvalidArgumentType(format!("union '{union}'"))),
        TypeArg::Value(value) => Err(TypeError::InvalidArgumentType(format!(
            "{} value '{value}'",
            value.type_name()
        ))),
    }
}

/// Does `alias` name a resolvable datatype?
pub fn is_registered(alias: &str) -> bool {
    DTYPE_REGISTRY.contains_key(alias.to_lowercase().as_str())
}

/// Resolvable aliases of a fixed kind, sorted
pub fn aliases_of(kind: NativeType) -> Vec<&'static str> {
    let mut aliases: Vec<_> = DTYPE_REGISTRY
        .iter()
        .filter(|(_, k)| **k == kind)
        .map(|(alias, _)| *alias)
        .collect();
    aliases.sort_unstable();
    aliases
}

fn lookup(alias: &str) -> TypeResult<&'static DataType> {
    DTYPE_REGISTRY
        .get(alias.to_lowercase().as_str())
        .map(|kind| kind.instance())
        .ok_or_else(|| TypeError::unrecognized(alias))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::Parser;
    use crate::types::{CustomTypeOptions, FunctionType, VariableType, make_custom_type};
    use pretty_assertions::assert_eq;

    const ALIASES: [&str; 12] = [
        "bool", "bool_", "int", "int_", "integer", "real", "complex", "void", "nil", "symbol", "*",
        "str",
    ];

    #[test]
    fn test_every_alias_round_trips() {
        for alias in ALIASES {
            let ty = datatype(alias).unwrap();
            assert!(ty.is_singleton(), "{alias} did not resolve to a singleton");
            let again = datatype(ty.name().to_lowercase().as_str()).unwrap();
            assert!(std::ptr::eq(ty, again), "{alias} did not round-trip");
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        for alias in ALIASES {
            let once = datatype(alias).unwrap();
            let twice = datatype(once).unwrap();
            assert!(std::ptr::eq(once, twice));
        }
    }

    #[test]
    fn test_identity_across_spellings() {
        assert!(std::ptr::eq(datatype("int").unwrap(), datatype("integer").unwrap()));
        assert!(std::ptr::eq(datatype("Bool").unwrap(), datatype("bool_").unwrap()));
        assert!(std::ptr::eq(datatype("STR").unwrap(), NativeType::String.instance()));
        assert!(std::ptr::eq(datatype("*").unwrap(), NativeType::Generic.instance()));
    }

    #[test]
    fn test_unknown_alias() {
        let err = datatype("quaternion").unwrap_err();
        assert!(matches!(err, TypeError::UnrecognizedDataType(a) if a == "quaternion"));
    }

    #[test]
    fn test_precision_aliases_are_not_datatypes() {
        assert!(matches!(datatype("float32"), Err(TypeError::UnrecognizedDataType(_))));
    }

    #[test]
    fn test_copy_resolves_to_singleton() {
        let copy = DataType::from(NativeType::Complex);
        assert!(std::ptr::eq(datatype(&copy).unwrap(), NativeType::Complex.instance()));
    }

    #[test]
    fn test_variable_type_resolves_to_its_rhs() {
        let var = DataType::from(VariableType::new(NativeType::Real.instance().clone(), "r8"));
        assert!(std::ptr::eq(datatype(&var).unwrap(), NativeType::Real.instance()));
    }

    #[test]
    fn test_unregistered_kinds_are_rejected() {
        for kind in [
            NativeType::Tuple,
            NativeType::Range,
            NativeType::ParallelRange,
            NativeType::Tensor,
        ] {
            assert!(matches!(
                datatype(kind.instance()),
                Err(TypeError::UnrecognizedDataType(_))
            ));
        }

        let int = NativeType::Integer.instance().clone();
        let real = NativeType::Real.instance().clone();
        let f = DataType::from(FunctionType::new(vec![int, real]).unwrap());
        assert!(matches!(datatype(&f), Err(TypeError::UnrecognizedDataType(_))));

        let foo = make_custom_type("FooClass", ["x"], CustomTypeOptions::default()).unwrap();
        assert!(matches!(
            datatype(&foo.datatype()),
            Err(TypeError::UnrecognizedDataType(n)) if n == "Foo"
        ));
    }

    #[test]
    fn test_names_matching_an_alias_resolve() {
        let f = DataType::from(FunctionType::new(vec![NativeType::Integer.instance().clone()]).unwrap());
        assert_eq!(f.name(), "integer");
        assert!(std::ptr::eq(datatype(&f).unwrap(), NativeType::Integer.instance()));

        let int = make_custom_type("IntClass", ["x"], CustomTypeOptions::default()).unwrap();
        assert!(std::ptr::eq(datatype(&int.datatype()).unwrap(), NativeType::Integer.instance()));

        let text = make_custom_type("StrClass", ["x"], CustomTypeOptions::default()).unwrap();
        assert!(std::ptr::eq(datatype(&text.datatype()).unwrap(), NativeType::String.instance()));
    }

    #[test]
    fn test_hint_expressions() {
        let hint = |source: &str| Parser::new(source).unwrap().parse_hint_only().unwrap();

        assert!(std::ptr::eq(datatype(&hint("Int")).unwrap(), NativeType::Integer.instance()));
        assert!(std::ptr::eq(datatype(&hint("*")).unwrap(), NativeType::Generic.instance()));
        assert!(matches!(
            datatype(&hint("float32")),
            Err(TypeError::UnrecognizedDataType(n)) if n == "float32"
        ));
        assert!(matches!(
            datatype(&hint("int -> real")),
            Err(TypeError::InvalidArgumentType(_))
        ));
        assert!(matches!(
            datatype(&hint("(int | real)")),
            Err(TypeError::InvalidArgumentType(_))
        ));
    }

    #[test]
    fn test_other_arguments_are_invalid() {
        let union = UnionType::new(vec![NativeType::Integer.instance().clone()]).unwrap();
        assert!(matches!(datatype(&union), Err(TypeError::InvalidArgumentType(_))));
        assert!(matches!(
            datatype(&NativeValue::Int(3)),
            Err(TypeError::InvalidArgumentType(_))
        ));
    }

    #[test]
    fn test_alias_listing() {
        assert_eq!(aliases_of(NativeType::Integer), vec!["int", "int_", "integer"]);
        assert_eq!(aliases_of(NativeType::Generic), vec!["*", "generic"]);
        assert!(aliases_of(NativeType::Tensor).is_empty());
        assert!(is_registered("INT"));
        assert!(!is_registered("tensor"));
    }
}
