//! Token stream over an annotation file

use super::token::{Token, TokenKind};
use crate::common::{Span, TypeError, TypeResult};
use logos::Logos;

/// Lexer for annotation files
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            finished: false,
        }
    }

    /// Next token; once the source is exhausted every call yields `Eof`
    pub fn next_token(&mut self) -> TypeResult<Token> {
        if !self.finished {
            match self.inner.next() {
                Some(Ok(kind)) => return Ok(Token::new(kind, self.inner.span().into())),
                Some(Err(())) => {
                    return Err(TypeError::lexer(
                        format!("unexpected character '{}'", self.inner.slice()),
                        self.inner.span().into(),
                    ));
                }
                None => self.finished = true,
            }
        }

        let end = self.inner.source().len();
        Ok(Token::new(TokenKind::Eof, Span::new(end, end)))
    }

    /// Every token up to and including `Eof`
    pub fn tokenize_all(mut self) -> TypeResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        let mut lexer = Lexer::new("class type let");

        assert!(matches!(lexer.next_token().unwrap().kind, TokenKind::Class));
        assert!(matches!(lexer.next_token().unwrap().kind, TokenKind::Type));
        assert!(matches!(lexer.next_token().unwrap().kind, TokenKind::Let));
        assert!(matches!(lexer.next_token().unwrap().kind, TokenKind::Eof));
    }

    #[test]
    fn test_identifiers_and_keyword_prefixes() {
        let mut lexer = Lexer::new("float32 classy int_ bool_");

        assert!(matches!(
            lexer.next_token().unwrap().kind,
            TokenKind::Identifier(s) if s == "float32"
        ));
        assert!(matches!(
            lexer.next_token().unwrap().kind,
            TokenKind::Identifier(s) if s == "classy"
        ));
        assert!(matches!(
            lexer.next_token().unwrap().kind,
            TokenKind::Identifier(s) if s == "int_"
        ));
        assert!(matches!(
            lexer.next_token().unwrap().kind,
            TokenKind::Identifier(s) if s == "bool_"
        ));
    }

    #[test]
    fn test_punctuation() {
        let source = "-> | * : = , ; ( )";
        let tokens = Lexer::new(source).tokenize_all().unwrap();

        assert!(matches!(tokens[0].kind, TokenKind::Arrow));
        assert!(matches!(tokens[1].kind, TokenKind::Pipe));
        assert!(matches!(tokens[2].kind, TokenKind::Star));
        assert!(matches!(tokens[3].kind, TokenKind::Colon));
        assert!(matches!(tokens[4].kind, TokenKind::Eq));
        assert!(matches!(tokens[5].kind, TokenKind::Comma));
        assert!(matches!(tokens[6].kind, TokenKind::Semi));
        assert!(matches!(tokens[7].kind, TokenKind::LParen));
        assert!(matches!(tokens[8].kind, TokenKind::RParen));
        assert!(matches!(tokens[9].kind, TokenKind::Eof));
    }

    #[test]
    fn test_comments_and_spans() {
        let source = "# header\nlet x: real # trailing\n";
        let tokens = Lexer::new(source).tokenize_all().unwrap();

        assert!(matches!(tokens[0].kind, TokenKind::Let));
        assert_eq!(tokens[0].span, Span::new(9, 12));
        assert!(matches!(&tokens[3].kind, TokenKind::Identifier(s) if s == "real"));
        assert!(matches!(tokens[4].kind, TokenKind::Eof));
    }

    #[test]
    fn test_unexpected_character() {
        let mut lexer = Lexer::new("let x: $");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();

        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, TypeError::Lexer { span, .. } if span == Span::new(7, 8)));
    }

    #[test]
    fn test_eof_repeats_at_end_of_source() {
        let mut lexer = Lexer::new("type t ");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();

        for _ in 0..2 {
            let token = lexer.next_token().unwrap();
            assert!(matches!(token.kind, TokenKind::Eof));
            assert_eq!(token.span, Span::new(7, 7));
        }
    }
}
