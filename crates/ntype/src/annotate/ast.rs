//! AST for annotation files

use std::fmt;

use crate::common::Span;

/// A parsed annotation file
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationFile {
    pub decls: Vec<Decl>,
}

impl AnnotationFile {
    pub fn new(decls: Vec<Decl>) -> Self {
        Self { decls }
    }
}

/// Identifier with its location
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self { name: name.into(), span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Decl {
    pub kind: DeclKind,
    pub span: Span,
}

impl Decl {
    pub fn new(kind: DeclKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeclKind {
    /// `class NAME(args) flags`
    Class(ClassDecl),
    /// `type ALIAS = hint`
    TypeAlias { name: Ident, hint: Hint },
    /// `let NAME: hint`
    Let { name: Ident, hint: Hint },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: Ident,
    pub argnames: Vec<Ident>,
    pub flags: Vec<ClassFlag>,
}

/// Trailing modifiers of a class declaration
#[derive(Debug, Clone, PartialEq)]
pub enum ClassFlag {
    Iterable(Span),
    With(Span),
    Monomorphic(Span),
    Prefix(Ident),
    Base(Ident),
}

/// A type hint expression
#[derive(Debug, Clone, PartialEq)]
pub struct Hint {
    pub kind: HintKind,
    pub span: Span,
}

impl Hint {
    pub fn new(kind: HintKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HintKind {
    /// Type alias, precision alias or declared name
    Name(String),
    /// `*`
    Generic,
    /// `a -> b -> c`, at least two members
    Arrow(Vec<Hint>),
    /// `a | b`, at least two members
    Union(Vec<Hint>),
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            HintKind::Name(name) => f.write_str(name),
            HintKind::Generic => f.write_str("*"),
            HintKind::Arrow(parts) => write_joined(f, parts, " -> "),
            HintKind::Union(parts) => write_joined(f, parts, " | "),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, parts: &[Hint], sep: &str) -> fmt::Result {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        // Composite members need parentheses to survive re-parsing
        if matches!(part.kind, HintKind::Arrow(_) | HintKind::Union(_)) {
            write!(f, "({part})")?;
        } else {
            write!(f, "{part}")?;
        }
    }
    Ok(())
}
