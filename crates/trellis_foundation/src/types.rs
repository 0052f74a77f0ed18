//! Assign kinds and the closed set of assign types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The three kinds of assign a component can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AssignKind {
    /// Caller-supplied input.
    Property,
    /// Component-local state.
    Data,
    /// A value shared along the component tree.
    Context,
}

impl AssignKind {
    /// The declaration keyword for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Data => "data",
            Self::Context => "context",
        }
    }
}

impl fmt::Display for AssignKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type of a declared assign.
///
/// The set is closed: there is no user-defined type. `Any` is the
/// universal fallback and the forced type of every `context :get`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AssignType {
    /// Accepts any value.
    Any,
    /// One or more CSS class names.
    CssClass,
    /// An ordered list.
    List,
    /// An event handler reference.
    Event,
    /// Child content passed by the caller.
    Children,
    /// `true` or `false`.
    Boolean,
    /// Text.
    String,
    /// A calendar date.
    Date,
    /// A date with a time of day.
    #[cfg_attr(feature = "serde", serde(rename = "datetime"))]
    DateTime,
    /// Any number.
    Number,
    /// A whole number.
    Integer,
    /// An arbitrary-precision decimal.
    Decimal,
    /// A key/value map.
    Map,
    /// A function value.
    Fun,
    /// An atom / keyword.
    Atom,
    /// A module reference.
    Module,
    /// A changeset.
    Changeset,
    /// A form.
    Form,
}

impl AssignType {
    /// Every member of the set, in canonical order.
    pub const ALL: [AssignType; 18] = [
        Self::Any,
        Self::CssClass,
        Self::List,
        Self::Event,
        Self::Children,
        Self::Boolean,
        Self::String,
        Self::Date,
        Self::DateTime,
        Self::Number,
        Self::Integer,
        Self::Decimal,
        Self::Map,
        Self::Fun,
        Self::Atom,
        Self::Module,
        Self::Changeset,
        Self::Form,
    ];

    /// The source name of this type (as written after `:`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::CssClass => "css_class",
            Self::List => "list",
            Self::Event => "event",
            Self::Children => "children",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Map => "map",
            Self::Fun => "fun",
            Self::Atom => "atom",
            Self::Module => "module",
            Self::Changeset => "changeset",
            Self::Form => "form",
        }
    }

    /// Looks up a type by its source name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.name() == name)
    }

    /// Renders the allowed set as `[:any, :css_class, ...]` for error messages.
    #[must_use]
    pub fn allowed_list() -> String {
        let names: Vec<String> = Self::ALL.iter().map(|ty| format!(":{}", ty.name())).collect();
        format!("[{}]", names.join(", "))
    }
}

impl fmt::Display for AssignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
