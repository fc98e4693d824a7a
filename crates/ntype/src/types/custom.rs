//! Custom type factory
//!
//! User-defined classes that the generator lowers to native-like tags get a
//! [`CustomType`] at run time. Each factory call yields a new nominal type:
//! two types built from identical arguments are still different types, and
//! are compared by handle identity.

use std::fmt;
use std::sync::Arc;

use super::datatype::{DataType, NativeType};
use super::value::NativeValue;
use crate::common::{TypeError, TypeResult};

/// Every class name handed to the factory ends with this
pub const CLASS_SUFFIX: &str = "Class";

/// Namespace tag of generated types
pub const PROJECT_TAG: &str = "Ntype";

/// Optional settings for [`make_custom_type`]
#[derive(Debug, Clone)]
pub struct CustomTypeOptions {
    /// Fixed kind the custom type specializes, if any
    pub base: Option<NativeType>,
    /// Appended to the project tag
    pub prefix: Option<String>,
    pub alias: Option<String>,
    pub is_iterable: bool,
    pub is_with_construct: bool,
    pub is_polymorphic: bool,
}

impl Default for CustomTypeOptions {
    fn default() -> Self {
        Self {
            base: None,
            prefix: None,
            alias: None,
            is_iterable: false,
            is_with_construct: false,
            is_polymorphic: true,
        }
    }
}

/// A nominal type generated for a user-defined class
#[derive(Debug)]
pub struct CustomType {
    name: String,
    class_name: String,
    prefix: String,
    argnames: Vec<String>,
    base: Option<NativeType>,
    alias: Option<String>,
    is_iterable: bool,
    is_with_construct: bool,
    is_polymorphic: bool,
}

/// Generate a new custom type
///
/// `name` must end in [`CLASS_SUFFIX`]; the stored name has it stripped.
/// Repeated argnames are kept once, in first-seen order.
pub fn make_custom_type<I, S>(
    name: &str,
    argnames: I,
    options: CustomTypeOptions,
) -> TypeResult<Arc<CustomType>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let stripped = match name.strip_suffix(CLASS_SUFFIX) {
        Some(stem) if !stem.is_empty() => stem,
        _ => return Err(TypeError::InvalidTypeName(name.to_string())),
    };

    let mut declared: Vec<String> = Vec::new();
    for arg in argnames {
        let arg = arg.into();
        if !declared.contains(&arg) {
            declared.push(arg);
        }
    }

    let prefix = match options.prefix {
        Some(p) => format!("{PROJECT_TAG}{p}"),
        None => PROJECT_TAG.to_string(),
    };

    Ok(Arc::new(CustomType {
        name: stripped.to_string(),
        class_name: format!("{prefix}{name}"),
        prefix,
        argnames: declared,
        base: options.base,
        alias: options.alias,
        is_iterable: options.is_iterable,
        is_with_construct: options.is_with_construct,
        is_polymorphic: options.is_polymorphic,
    }))
}

impl CustomType {
    /// Name without the class suffix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespaced name of the generated class, e.g. `NtypeMpiCommClass`
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn argnames(&self) -> &[String] {
        &self.argnames
    }

    pub fn accepts(&self, key: &str) -> bool {
        self.argnames.iter().any(|a| a == key)
    }

    pub fn base(&self) -> Option<NativeType> {
        self.base
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn is_iterable(&self) -> bool {
        self.is_iterable
    }

    pub fn is_with_construct(&self) -> bool {
        self.is_with_construct
    }

    pub fn is_polymorphic(&self) -> bool {
        self.is_polymorphic
    }

    /// Tag for this type
    pub fn datatype(self: &Arc<Self>) -> DataType {
        DataType::Custom(Arc::clone(self))
    }

    /// Same generated type?
    pub fn same(a: &Arc<Self>, b: &Arc<Self>) -> bool {
        Arc::ptr_eq(a, b)
    }

    /// Build an instance from attribute values
    ///
    /// Every key is checked before anything is stored, so a rejected call
    /// leaves no instance behind.
    pub fn instantiate<I, K>(self: &Arc<Self>, attrs: I) -> TypeResult<CustomValue>
    where
        I: IntoIterator<Item = (K, NativeValue)>,
        K: Into<String>,
    {
        let attrs: Vec<(String, NativeValue)> =
            attrs.into_iter().map(|(k, v)| (k.into(), v)).collect();

        if let Some((key, _)) = attrs.iter().find(|(key, _)| !self.accepts(key)) {
            return Err(self.invalid_attribute(key));
        }

        let mut value = CustomValue {
            ty: Arc::clone(self),
            attrs: Vec::with_capacity(attrs.len()),
        };
        for (key, v) in attrs {
            value.store(key, v);
        }
        Ok(value)
    }

    fn invalid_attribute(&self, key: &str) -> TypeError {
        TypeError::InvalidAttribute {
            key: key.to_string(),
            type_name: self.class_name.clone(),
        }
    }
}

impl fmt::Display for CustomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name.to_lowercase())
    }
}

/// An instance of a custom type
#[derive(Debug, Clone)]
pub struct CustomValue {
    ty: Arc<CustomType>,
    attrs: Vec<(String, NativeValue)>,
}

impl CustomValue {
    pub fn custom_type(&self) -> &Arc<CustomType> {
        &self.ty
    }

    pub fn get(&self, key: &str) -> Option<&NativeValue> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Set one declared attribute
    pub fn set_attr(&mut self, key: &str, value: NativeValue) -> TypeResult<()> {
        if !self.ty.accepts(key) {
            return Err(self.ty.invalid_attribute(key));
        }
        self.store(key.to_string(), value);
        Ok(())
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &NativeValue)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn store(&mut self, key: String, value: NativeValue) {
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_name_is_stripped() {
        let foo = make_custom_type("FooClass", ["x"], CustomTypeOptions::default()).unwrap();
        assert_eq!(foo.name(), "Foo");
        assert_eq!(foo.to_string(), "foo");
        assert_eq!(foo.class_name(), "NtypeFooClass");
        assert_eq!(foo.prefix(), "Ntype");
    }

    #[test]
    fn test_each_call_is_a_new_type() {
        let a = make_custom_type("FooClass", ["x"], CustomTypeOptions::default()).unwrap();
        let b = make_custom_type("FooClass", ["x"], CustomTypeOptions::default()).unwrap();

        assert!(!CustomType::same(&a, &b));
        assert_ne!(a.datatype(), b.datatype());
        assert_eq!(a.datatype(), a.datatype());
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn test_missing_suffix_is_rejected() {
        for name in ["Foo", "Class", "FooClas"] {
            let err = make_custom_type(name, ["x"], CustomTypeOptions::default()).unwrap_err();
            assert!(matches!(err, TypeError::InvalidTypeName(n) if n == name));
        }
    }

    #[test]
    fn test_options_are_stored() {
        let comm = make_custom_type(
            "CommClass",
            ["size", "rank", "size"],
            CustomTypeOptions {
                prefix: Some("Mpi".into()),
                alias: Some("comm".into()),
                is_with_construct: true,
                is_polymorphic: false,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(comm.prefix(), "NtypeMpi");
        assert_eq!(comm.class_name(), "NtypeMpiCommClass");
        assert_eq!(comm.alias(), Some("comm"));
        assert_eq!(comm.argnames(), &["size".to_string(), "rank".to_string()]);
        assert!(comm.is_with_construct());
        assert!(!comm.is_iterable());
        assert!(!comm.is_polymorphic());
        assert_eq!(comm.base(), None);
    }

    #[test]
    fn test_polymorphic_by_default() {
        let t = make_custom_type("TClass", Vec::<String>::new(), CustomTypeOptions::default()).unwrap();
        assert!(t.is_polymorphic());
        assert!(!t.is_iterable());
        assert!(!t.is_with_construct());
    }

    #[test]
    fn test_instantiate_with_declared_attributes() {
        let point = make_custom_type("PointClass", ["x", "y"], CustomTypeOptions::default()).unwrap();
        let mut p = point
            .instantiate([("x", NativeValue::Int(1)), ("y", NativeValue::Real(2.5))])
            .unwrap();

        assert_eq!(p.get("x"), Some(&NativeValue::Int(1)));
        assert_eq!(p.get("y"), Some(&NativeValue::Real(2.5)));
        assert!(CustomType::same(p.custom_type(), &point));

        p.set_attr("x", NativeValue::Int(7)).unwrap();
        assert_eq!(p.get("x"), Some(&NativeValue::Int(7)));
        assert_eq!(p.attrs().count(), 2);
    }

    #[test]
    fn test_undeclared_attribute_is_rejected() {
        let point = make_custom_type("PointClass", ["x", "y"], CustomTypeOptions::default()).unwrap();

        let err = point
            .instantiate([("x", NativeValue::Int(1)), ("z", NativeValue::Int(3))])
            .unwrap_err();
        assert!(matches!(
            &err,
            TypeError::InvalidAttribute { key, type_name } if key == "z" && type_name == "NtypePointClass"
        ));
        // Only the type itself still holds a reference
        assert_eq!(Arc::strong_count(&point), 1);

        let mut p = point.instantiate([("y", NativeValue::Int(0))]).unwrap();
        assert!(p.set_attr("w", NativeValue::Bool(true)).is_err());
        assert_eq!(p.get("w"), None);
    }
}
