//! Recursive descent parser for annotation files

use crate::annotate::ast::*;
use crate::annotate::lexer::{Lexer, Token, TokenKind};
use crate::common::{Span, TypeError, TypeResult};

/// Recursive descent parser for annotation files
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    /// Span of the most recently consumed token
    previous: Span,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source
    pub fn new(source: &'a str) -> TypeResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current, previous: Span::default() })
    }

    /// Parse a complete annotation file
    pub fn parse(&mut self) -> TypeResult<AnnotationFile> {
        let mut decls = Vec::new();

        while !self.at_end() {
            decls.push(self.parse_declaration()?);

            let separated = self.match_token(&TokenKind::Semi)?;
            while self.match_token(&TokenKind::Semi)? {}
            if !separated && !self.at_end() && !self.current.kind.starts_declaration() {
                return Err(self.unexpected("';' or a new declaration"));
            }
        }

        Ok(AnnotationFile::new(decls))
    }

    /// Parse a single hint expression spanning the whole source
    pub fn parse_hint_only(&mut self) -> TypeResult<Hint> {
        let hint = self.parse_hint()?;
        if !self.at_end() {
            return Err(self.unexpected("end of hint"));
        }
        Ok(hint)
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    fn at_end(&self) -> bool {
        matches!(self.current.kind, TokenKind::Eof)
    }

    fn advance(&mut self) -> TypeResult<Token> {
        let prev = std::mem::replace(&mut self.current, self.lexer.next_token()?);
        self.previous = prev.span;
        Ok(prev)
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current.kind) == std::mem::discriminant(kind)
    }

    fn match_token(&mut self, kind: &TokenKind) -> TypeResult<bool> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: TokenKind) -> TypeResult<Token> {
        if self.check(&kind) {
            self.advance()
        } else {
            Err(self.unexpected(&kind.to_string()))
        }
    }

    fn expect_ident(&mut self) -> TypeResult<Ident> {
        let TokenKind::Identifier(name) = &self.current.kind else {
            return Err(self.unexpected("identifier"));
        };
        let ident = Ident::new(name.clone(), self.current.span);
        self.advance()?;
        Ok(ident)
    }

    fn unexpected(&self, expected: &str) -> TypeError {
        TypeError::parser(
            format!("expected {}, found {}", expected, self.current.kind),
            self.current.span,
        )
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn parse_declaration(&mut self) -> TypeResult<Decl> {
        let start = self.current.span;

        let kind = match self.current.kind {
            TokenKind::Class => {
                self.advance()?;
                DeclKind::Class(self.parse_class()?)
            }
            TokenKind::Type => {
                self.advance()?;
                let name = self.expect_ident()?;
                self.expect(TokenKind::Eq)?;
                let hint = self.parse_hint()?;
                DeclKind::TypeAlias { name, hint }
            }
            TokenKind::Let => {
                self.advance()?;
                let name = self.expect_ident()?;
                self.expect(TokenKind::Colon)?;
                let hint = self.parse_hint()?;
                DeclKind::Let { name, hint }
            }
            _ => return Err(self.unexpected("'class', 'type' or 'let'")),
        };

        Ok(Decl::new(kind, start.merge(self.previous)))
    }

    fn parse_class(&mut self) -> TypeResult<ClassDecl> {
        let name = self.expect_ident()?;

        self.expect(TokenKind::LParen)?;
        let mut argnames = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                argnames.push(self.expect_ident()?);
                if !self.match_token(&TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;

        // Flags run until the next declaration
        let mut flags = Vec::new();
        while let TokenKind::Identifier(word) = &self.current.kind {
            let span = self.current.span;
            let flag = match word.as_str() {
                "iterable" => ClassFlag::Iterable(span),
                "with" => ClassFlag::With(span),
                "monomorphic" => ClassFlag::Monomorphic(span),
                "prefix" | "base" => {
                    let is_prefix = word == "prefix";
                    self.advance()?;
                    self.expect(TokenKind::Eq)?;
                    let value = self.expect_ident()?;
                    flags.push(if is_prefix {
                        ClassFlag::Prefix(value)
                    } else {
                        ClassFlag::Base(value)
                    });
                    continue;
                }
                other => {
                    return Err(TypeError::parser(format!("unknown class flag '{other}'"), span));
                }
            };
            self.advance()?;
            flags.push(flag);
        }

        Ok(ClassDecl { name, argnames, flags })
    }

    // =========================================================================
    // Hints
    // =========================================================================

    fn parse_hint(&mut self) -> TypeResult<Hint> {
        let first = self.parse_union()?;
        if !self.check(&TokenKind::Arrow) {
            return Ok(first);
        }

        let mut parts = vec![first];
        while self.match_token(&TokenKind::Arrow)? {
            parts.push(self.parse_union()?);
        }
        let span = parts[0].span.merge(parts[parts.len() - 1].span);
        Ok(Hint::new(HintKind::Arrow(parts), span))
    }

    fn parse_union(&mut self) -> TypeResult<Hint> {
        let first = self.parse_atom()?;
        if !self.check(&TokenKind::Pipe) {
            return Ok(first);
        }

        let mut parts = vec![first];
        while self.match_token(&TokenKind::Pipe)? {
            parts.push(self.parse_atom()?);
        }
        let span = parts[0].span.merge(parts[parts.len() - 1].span);
        Ok(Hint::new(HintKind::Union(parts), span))
    }

    fn parse_atom(&mut self) -> TypeResult<Hint> {
        let span = self.current.span;
        match &self.current.kind {
            TokenKind::Identifier(name) => {
                let hint = Hint::new(HintKind::Name(name.clone()), span);
                self.advance()?;
                Ok(hint)
            }
            TokenKind::Star => {
                self.advance()?;
                Ok(Hint::new(HintKind::Generic, span))
            }
            TokenKind::LParen => {
                self.advance()?;
                let mut inner = self.parse_hint()?;
                self.expect(TokenKind::RParen)?;
                inner.span = span.merge(self.previous);
                Ok(inner)
            }
            _ => Err(self.unexpected("a type")),
        }
    }
}
