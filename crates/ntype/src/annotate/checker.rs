//! Annotation checker - resolves hints to datatypes

use std::sync::Arc;

use super::ast::*;
use super::scope::{Annotation, Scope, TypeSymbol};
use crate::common::{Span, TypeError, TypeResult};
use crate::types::{
    CustomType, CustomTypeOptions, DataType, FunctionType, NativeType, UnionType, VariableType,
    datatype, make_custom_type, precision_of,
};

/// A checked declaration
#[derive(Debug, Clone)]
pub struct Binding {
    pub name: String,
    pub kind: BindingKind,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum BindingKind {
    Class(Arc<CustomType>),
    Alias(Annotation),
    Symbol(Annotation),
}

/// Checks declarations in order; later declarations see earlier ones
pub struct Checker {
    scope: Scope,
}

impl Checker {
    pub fn new() -> Self {
        Self { scope: Scope::new() }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Check a whole file, stopping at the first error
    pub fn check(&mut self, file: &AnnotationFile) -> TypeResult<Vec<Binding>> {
        file.decls.iter().map(|decl| self.check_declaration(decl)).collect()
    }

    fn check_declaration(&mut self, decl: &Decl) -> TypeResult<Binding> {
        match &decl.kind {
            DeclKind::Class(class) => self.check_class(class, decl.span),
            DeclKind::TypeAlias { name, hint } => {
                let annotation = match self.resolve_hint(hint)? {
                    Annotation::Data { ty, precision } => {
                        Annotation::data(VariableType::new(ty.into_owned(), name.name.as_str()).into(), precision)
                    }
                    union @ Annotation::Union(_) => union,
                };
                self.scope
                    .define_type(&name.name, TypeSymbol::Alias(annotation.clone()))
                    .map_err(|n| TypeError::Redefinition(n).at(name.span))?;
                Ok(Binding {
                    name: name.name.clone(),
                    kind: BindingKind::Alias(annotation),
                    span: decl.span,
                })
            }
            DeclKind::Let { name, hint } => {
                let annotation = self.resolve_hint(hint)?;
                self.scope
                    .define_symbol(&name.name, annotation.clone())
                    .map_err(|n| TypeError::Redefinition(n).at(name.span))?;
                Ok(Binding {
                    name: name.name.clone(),
                    kind: BindingKind::Symbol(annotation),
                    span: decl.span,
                })
            }
        }
    }

    fn check_class(&mut self, class: &ClassDecl, span: Span) -> TypeResult<Binding> {
        let mut options = CustomTypeOptions::default();
        for flag in &class.flags {
            match flag {
                ClassFlag::Iterable(_) => options.is_iterable = true,
                ClassFlag::With(_) => options.is_with_construct = true,
                ClassFlag::Monomorphic(_) => options.is_polymorphic = false,
                ClassFlag::Prefix(id) => options.prefix = Some(id.name.clone()),
                ClassFlag::Base(id) => {
                    let base = NativeType::from_name(&id.name)
                        .ok_or_else(|| TypeError::unrecognized(id.name.as_str()).at(id.span))?;
                    options.base = Some(base);
                }
            }
        }

        let argnames = class.argnames.iter().map(|a| a.name.as_str());
        let custom = make_custom_type(&class.name.name, argnames, options)
            .map_err(|e| e.at(class.name.span))?;

        self.scope
            .define_type(custom.name(), TypeSymbol::Class(Arc::clone(&custom)))
            .map_err(|n| TypeError::Redefinition(n).at(class.name.span))?;

        Ok(Binding {
            name: custom.name().to_string(),
            kind: BindingKind::Class(custom),
            span,
        })
    }

    /// Resolve a hint against the declarations seen so far
    pub fn resolve_hint(&self, hint: &Hint) -> TypeResult<Annotation> {
        match &hint.kind {
            HintKind::Name(name) => self.resolve_name(name).map_err(|e| e.at(hint.span)),
            HintKind::Generic => Ok(Annotation::canonical(datatype(hint)?, None)),
            HintKind::Arrow(parts) => {
                let domains = parts
                    .iter()
                    .map(|part| self.resolve_domain(part))
                    .collect::<TypeResult<Vec<_>>>()?;
                let func = FunctionType::new(domains).map_err(|e| e.at(hint.span))?;
                Ok(Annotation::data(func.into(), None))
            }
            HintKind::Union(parts) => {
                let mut members = Vec::with_capacity(parts.len());
                for part in parts {
                    match self.resolve_hint(part)? {
                        Annotation::Data { ty, .. } => members.push(ty.into_owned()),
                        Annotation::Union(inner) => members.extend(inner.members().iter().cloned()),
                    }
                }
                let union = UnionType::new(members).map_err(|e| e.at(hint.span))?;
                Ok(Annotation::Union(union))
            }
        }
    }

    fn resolve_domain(&self, hint: &Hint) -> TypeResult<DataType> {
        match self.resolve_hint(hint)? {
            Annotation::Data { ty, .. } => Ok(ty.into_owned()),
            Annotation::Union(union) => Err(TypeError::InvalidArgumentType(format!(
                "union '{union}' in a function signature"
            ))
            .at(hint.span)),
        }
    }

    /// Declared names first, then precision aliases, then datatype aliases
    fn resolve_name(&self, name: &str) -> TypeResult<Annotation> {
        if let Some(symbol) = self.scope.lookup_type(name) {
            return Ok(match symbol {
                TypeSymbol::Alias(annotation) => annotation.clone(),
                TypeSymbol::Class(custom) => Annotation::data(custom.datatype(), None),
            });
        }

        match precision_of(name) {
            Ok(precision) => {
                return Ok(Annotation::canonical(precision.datatype(), Some(precision)));
            }
            Err(TypeError::UnknownPrecisionAlias(_)) => {}
            Err(other) => return Err(other),
        }

        let ty = datatype(name)?;
        let precision = ty.as_native().and_then(NativeType::default_precision);
        Ok(Annotation::canonical(ty, precision))
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}
