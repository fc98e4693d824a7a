//! Annotation front end
//!
//! Reads declaration files of type hints:
//! - Lexing source into tokens
//! - Parsing tokens into an AST
//! - Checking hints against the datatype model

pub mod ast;
pub mod checker;
pub mod lexer;
pub mod parser;
pub mod scope;

pub use ast::*;
pub use checker::{Binding, BindingKind, Checker};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;
pub use scope::{Annotation, Scope, TypeSymbol};
