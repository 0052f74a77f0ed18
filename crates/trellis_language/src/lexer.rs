//! Lexer for declaration sources.
//!
//! The lexer converts source text into a stream of tokens. It never fails:
//! malformed input becomes a [`TokenKind::Error`] token that the parser
//! reports with its position.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::source::Span;
use crate::token::{Token, TokenKind};

/// Lexer over a declaration source.
pub struct Lexer<'src> {
    source: &'src str,
    chars: Peekable<CharIndices<'src>>,
    line: u32,
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes all source, ending with a single [`TokenKind::Eof`].
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.offset();
        let (line, column) = (self.line, self.column);

        let Some(c) = self.peek() else {
            return Token::new(TokenKind::Eof, Span::new(start, start, line, column));
        };

        let kind = match c {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '"' => self.scan_string(),
            ':' => {
                self.bump();
                let name = self.take_while(is_symbol_char);
                if name.is_empty() {
                    TokenKind::Error("expected keyword name after ':'".into())
                } else {
                    TokenKind::Keyword(name.to_string())
                }
            }
            c if c.is_ascii_digit() => self.scan_number(),
            '-' | '+' if self.peek_second().is_some_and(|c| c.is_ascii_digit()) => {
                self.scan_number()
            }
            c if is_symbol_start(c) => match self.take_while(is_symbol_char) {
                "nil" => TokenKind::Nil,
                "true" => TokenKind::True,
                "false" => TokenKind::False,
                name => TokenKind::Symbol(name.to_string()),
            },
            other => {
                self.bump();
                TokenKind::Error(format!("unexpected character: {other}"))
            }
        };

        Token::new(kind, Span::new(start, self.offset(), line, column))
    }

    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.source.len(), |(i, _)| *i)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_second(&self) -> Option<char> {
        let mut ahead = self.chars.clone();
        ahead.next();
        ahead.next().map(|(_, c)| c)
    }

    fn bump(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.bump();
        kind
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let source = self.source;
        let start = self.offset();
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        let end = self.offset();
        &source[start..end]
    }

    /// Whitespace includes commas, so `[:a 1, :b 2]` reads naturally.
    /// Skips whitespace, commas, and `;` line comments.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c == ';' {
                self.take_while(|c| c != '\n');
            } else if c.is_whitespace() || c == ',' {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn scan_string(&mut self) -> TokenKind {
        self.bump();
        let mut text = String::new();
        loop {
            match self.bump() {
                Some('"') => return TokenKind::String(text),
                Some('\\') => match self.bump() {
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some('\\') => text.push('\\'),
                    Some('"') => text.push('"'),
                    Some(c) => return TokenKind::Error(format!("invalid escape sequence: \\{c}")),
                    None => return TokenKind::Error("unterminated string literal".into()),
                },
                Some(c) => text.push(c),
                None => return TokenKind::Error("unterminated string literal".into()),
            }
        }
    }

    fn scan_number(&mut self) -> TokenKind {
        let start = self.offset();
        if matches!(self.peek(), Some('-' | '+')) {
            self.bump();
        }
        self.take_while(|c| c.is_ascii_digit());
        let mut is_float = false;
        if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.bump();
            self.take_while(|c| c.is_ascii_digit());
        }
        let end = self.offset();
        let source = self.source;
        let text = &source[start..end];

        if is_float {
            text.parse()
                .map_or_else(|e| TokenKind::Error(format!("invalid float: {e}")), TokenKind::Float)
        } else {
            text.parse()
                .map_or_else(|e| TokenKind::Error(format!("invalid integer: {e}")), TokenKind::Int)
        }
    }
}

/// Returns true if `c` can start a symbol.
fn is_symbol_start(c: char) -> bool {
    c.is_alphabetic() || matches!(c, '_' | '-' | '+' | '*' | '/' | '!' | '?' | '<' | '>' | '=')
}

/// Returns true if `c` can appear in a symbol after the first character.
///
/// `:` is allowed so that form heads like `component:` lex as one symbol.
fn is_symbol_char(c: char) -> bool {
    is_symbol_start(c) || c.is_ascii_digit() || c == '.' || c == ':'
}
