//! Lexer module for tokenizing annotation files

mod token;
mod scanner;

pub use token::{Token, TokenKind};
pub use scanner::Lexer;
