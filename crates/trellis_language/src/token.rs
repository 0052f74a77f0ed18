//! Tokens of the `.trl` declaration syntax.

use crate::source::Span;

/// One lexed token and where it was written.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What was lexed.
    pub kind: TokenKind,
    /// Where it was lexed.
    pub span: Span,
}

impl Token {
    /// Pairs a token kind with its span.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Everything the lexer can produce. Whitespace, commas and `;` comments
/// never reach the parser.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Opens a declaration form.
    LParen,
    /// Closes a declaration form.
    RParen,
    /// Opens a keyword list or a `defn` parameter vector.
    LBracket,
    /// Closes a keyword list or parameter vector.
    RBracket,
    /// Opens an option map.
    LBrace,
    /// Closes an option map.
    RBrace,

    /// Option value `nil`.
    Nil,
    /// Boolean option value.
    True,
    /// Boolean option value.
    False,
    /// Signed integer option value.
    Int(i64),
    /// Floating-point option value.
    Float(f64),
    /// Docs and string option values.
    String(String),
    /// Assign names, component references, and form heads such as `component:`.
    Symbol(String),
    /// Types, actions and option keys, stored without the leading `:`.
    Keyword(String),

    /// No more input.
    Eof,
    /// Malformed input; the parser reports it with the span.
    Error(String),
}

impl TokenKind {
    /// How the parser names this token in errors.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Nil => "nil",
            Self::True => "true",
            Self::False => "false",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Keyword(_) => "keyword",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
