//! Syntax tree for declaration sources.
//!
//! Declaration names, type tokens, and option expressions are all kept as
//! [`Ast`] nodes, so the schema layer can distinguish a bare identifier from
//! a literal or a computed expression, and render options exactly as the
//! author wrote them.

use crate::source::Span;

/// A syntax node.
#[derive(Clone, Debug, PartialEq)]
pub enum Ast {
    /// `nil`
    Nil(Span),
    /// `true` or `false`
    Bool(bool, Span),
    /// Integer literal like `42`
    Int(i64, Span),
    /// Float literal like `3.14`
    Float(f64, Span),
    /// String literal like `"hello"`
    String(String, Span),
    /// Symbol like `title` or `MyApp.Parent`
    Symbol(String, Span),
    /// Keyword like `:string`
    Keyword(String, Span),
    /// List form like `(property title :string)`
    List(Vec<Ast>, Span),
    /// Vector form like `[:a 1]`
    Vector(Vec<Ast>, Span),
    /// Map form like `{:default 1}`
    Map(Vec<(Ast, Ast)>, Span),
}

impl Ast {
    /// Returns the source span of this node.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Nil(s)
            | Self::Bool(_, s)
            | Self::Int(_, s)
            | Self::Float(_, s)
            | Self::String(_, s)
            | Self::Symbol(_, s)
            | Self::Keyword(_, s)
            | Self::List(_, s)
            | Self::Vector(_, s)
            | Self::Map(_, s) => *s,
        }
    }

    /// Returns the symbol name, or None if not a symbol.
    #[must_use]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name, _) => Some(name),
            _ => None,
        }
    }

    /// Returns the keyword name (without `:`), or None if not a keyword.
    #[must_use]
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Self::Keyword(name, _) => Some(name),
            _ => None,
        }
    }

    /// Returns the boolean value, or None if not a boolean literal.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b, _) => Some(*b),
            _ => None,
        }
    }

    /// Returns the elements of a list, or None if not a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Ast]> {
        match self {
            Self::List(elements, _) => Some(elements),
            _ => None,
        }
    }

    /// Returns the elements of a vector, or None if not a vector.
    #[must_use]
    pub fn as_vector(&self) -> Option<&[Ast]> {
        match self {
            Self::Vector(elements, _) => Some(elements),
            _ => None,
        }
    }

    /// Returns the elements of a list or vector.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Ast]> {
        match self {
            Self::List(elements, _) | Self::Vector(elements, _) => Some(elements),
            _ => None,
        }
    }

    /// Returns true if this is `nil`.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil(_))
    }

    /// Returns true if this is a map literal.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_, _))
    }

    /// Returns the name if this node is a bare identifier.
    ///
    /// A bare identifier is a symbol without namespace (`/`) or module
    /// (`.`) separators, starting with a letter or underscore. Literals,
    /// keywords, and compound forms are never identifiers.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        let name = self.as_symbol()?;
        let mut chars = name.chars();
        let first = chars.next()?;
        let valid = (first.is_alphabetic() || first == '_')
            && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '?' | '!'));
        valid.then_some(name)
    }

    /// Returns the name if this node names a component.
    ///
    /// Component references are symbols made of one or more `.`-separated
    /// segments, each starting with an uppercase letter (`Parent`,
    /// `MyApp.Components.Card`).
    #[must_use]
    pub fn as_component_ref(&self) -> Option<&str> {
        let name = self.as_symbol()?;
        let valid = name.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars.next().is_some_and(|c| c.is_ascii_uppercase())
                && chars.all(|c| c.is_alphanumeric() || c == '_')
        });
        valid.then_some(name)
    }

    /// A human-readable type name for this node.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil(_) => "nil",
            Self::Bool(_, _) => "bool",
            Self::Int(_, _) => "int",
            Self::Float(_, _) => "float",
            Self::String(_, _) => "string",
            Self::Symbol(_, _) => "symbol",
            Self::Keyword(_, _) => "keyword",
            Self::List(_, _) => "list",
            Self::Vector(_, _) => "vector",
            Self::Map(_, _) => "map",
        }
    }
}

/// Constructors with a default span, for declarations built in code.
impl Ast {
    /// Creates a `nil` node.
    #[must_use]
    pub fn nil() -> Self {
        Self::Nil(Span::default())
    }

    /// Creates a boolean node.
    #[must_use]
    pub fn bool_lit(b: bool) -> Self {
        Self::Bool(b, Span::default())
    }

    /// Creates an integer node.
    #[must_use]
    pub fn int(n: i64) -> Self {
        Self::Int(n, Span::default())
    }

    /// Creates a string node.
    #[must_use]
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into(), Span::default())
    }

    /// Creates a symbol node.
    #[must_use]
    pub fn symbol(s: impl Into<String>) -> Self {
        Self::Symbol(s.into(), Span::default())
    }

    /// Creates a keyword node (`name` without the leading `:`).
    #[must_use]
    pub fn keyword(name: impl Into<String>) -> Self {
        Self::Keyword(name.into(), Span::default())
    }

    /// Creates a list node.
    #[must_use]
    pub fn list(elements: Vec<Ast>) -> Self {
        Self::List(elements, Span::default())
    }

    /// Creates a vector node.
    #[must_use]
    pub fn vector(elements: Vec<Ast>) -> Self {
        Self::Vector(elements, Span::default())
    }

    /// Creates a map node.
    #[must_use]
    pub fn map(entries: Vec<(Ast, Ast)>) -> Self {
        Self::Map(entries, Span::default())
    }

    /// Creates a keyword list `[:k1 v1 :k2 v2 ...]` from key/value pairs.
    #[must_use]
    pub fn keyword_list<K: Into<String>>(pairs: impl IntoIterator<Item = (K, Ast)>) -> Self {
        let elements = pairs
            .into_iter()
            .flat_map(|(key, value)| [Self::keyword(key), value])
            .collect();
        Self::vector(elements)
    }
}
