//! Parser for declaration sources.
//!
//! The parser converts a stream of tokens into [`Ast`] forms. The lexer has
//! already dropped comments, so every token becomes part of a form.

use trellis_foundation::{Error, Result};

use crate::ast::Ast;
use crate::lexer::Lexer;
use crate::source::Span;
use crate::token::{Token, TokenKind};

/// Parses every top-level form in `source`.
///
/// # Errors
/// Returns a parse error with line and column if the source is malformed.
pub fn parse(source: &str) -> Result<Vec<Ast>> {
    Parser::new(source).parse_all()
}

/// Parser over a declaration source.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// Parses all top-level forms.
    ///
    /// # Errors
    /// Returns an error at the first malformed form.
    pub fn parse_all(&mut self) -> Result<Vec<Ast>> {
        let mut forms = Vec::new();
        while self.current.kind != TokenKind::Eof {
            forms.push(self.parse_form()?);
        }
        Ok(forms)
    }

    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    fn parse_form(&mut self) -> Result<Ast> {
        let token = self.advance();
        let span = token.span;
        match token.kind {
            TokenKind::Nil => Ok(Ast::Nil(span)),
            TokenKind::True => Ok(Ast::Bool(true, span)),
            TokenKind::False => Ok(Ast::Bool(false, span)),
            TokenKind::Int(n) => Ok(Ast::Int(n, span)),
            TokenKind::Float(n) => Ok(Ast::Float(n, span)),
            TokenKind::String(s) => Ok(Ast::String(s, span)),
            TokenKind::Symbol(s) => Ok(Ast::Symbol(s, span)),
            TokenKind::Keyword(k) => Ok(Ast::Keyword(k, span)),
            TokenKind::LParen => {
                let (elements, span) = self.parse_sequence(span, &TokenKind::RParen, "list")?;
                Ok(Ast::List(elements, span))
            }
            TokenKind::LBracket => {
                let (elements, span) = self.parse_sequence(span, &TokenKind::RBracket, "vector")?;
                Ok(Ast::Vector(elements, span))
            }
            TokenKind::LBrace => self.parse_map(span),
            TokenKind::Error(message) => Err(error_at(span, message)),
            TokenKind::Eof => Err(error_at(span, "unexpected end of input")),
            kind @ (TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace) => {
                Err(error_at(span, format!("unexpected {}", kind.name())))
            }
        }
    }

    /// Parses forms up to `close`, returning them with a span from the
    /// opening delimiter to the closing one.
    fn parse_sequence(
        &mut self,
        open: Span,
        close: &TokenKind,
        what: &str,
    ) -> Result<(Vec<Ast>, Span)> {
        let mut elements = Vec::new();
        loop {
            if &self.current.kind == close {
                let end = self.advance().span;
                return Ok((elements, open.to(end)));
            }
            if self.current.kind == TokenKind::Eof {
                return Err(error_at(open, format!("unterminated {what}")));
            }
            elements.push(self.parse_form()?);
        }
    }

    fn parse_map(&mut self, open: Span) -> Result<Ast> {
        let (elements, span) = self.parse_sequence(open, &TokenKind::RBrace, "map")?;
        if elements.len() % 2 != 0 {
            return Err(error_at(span, "map literal must have an even number of forms"));
        }
        let mut entries = Vec::with_capacity(elements.len() / 2);
        let mut iter = elements.into_iter();
        while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
            entries.push((key, value));
        }
        Ok(Ast::Map(entries, span))
    }
}

fn error_at(span: Span, message: impl Into<String>) -> Error {
    Error::parse(message, span.line, span.column)
}
