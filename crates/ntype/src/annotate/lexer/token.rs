//! Token definitions for annotation files

use crate::common::Span;
use logos::Logos;

/// Token with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// All token kinds of the annotation language
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]  // Skip whitespace
#[logos(skip r"#[^\n]*")]       // Skip line comments
pub enum TokenKind {
    // === Keywords ===
    #[token("class")]
    Class,
    #[token("type")]
    Type,
    #[token("let")]
    Let,

    // === Identifiers ===
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // === Punctuation ===
    #[token("->")]
    Arrow,
    #[token("|")]
    Pipe,
    #[token("*")]
    Star,
    #[token(":")]
    Colon,
    #[token("=")]
    Eq,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // Special
    Eof,
}

impl TokenKind {
    /// Does this token start a declaration?
    pub fn starts_declaration(&self) -> bool {
        matches!(self, TokenKind::Class | TokenKind::Type | TokenKind::Let)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Identifier(s) => write!(f, "identifier '{}'", s),
            TokenKind::Class => write!(f, "'class'"),
            TokenKind::Type => write!(f, "'type'"),
            TokenKind::Let => write!(f, "'let'"),
            TokenKind::Arrow => write!(f, "'->'"),
            TokenKind::Pipe => write!(f, "'|'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Eq => write!(f, "'='"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Semi => write!(f, "';'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Eof => write!(f, "end of file"),
        }
    }
}
