//! The `Assign` record and its context-specific modes.

use std::fmt;
use std::sync::Arc;

use trellis_foundation::{AssignKind, AssignType, ErrorContext};
use trellis_language::{Ast, Span};

use crate::options::Options;
use crate::validate::INTERNAL_OPTIONS;

/// Where a declaration was written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Site {
    /// Source file of the component definition.
    pub file: Arc<str>,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

impl Site {
    /// Creates a site in `file` at the start of `span`.
    #[must_use]
    pub fn new(file: Arc<str>, span: Span) -> Self {
        Self {
            file,
            line: span.line,
            column: span.column,
        }
    }

    /// Error context pointing at this site.
    #[must_use]
    pub fn error_context(&self) -> ErrorContext {
        ErrorContext::new()
            .with_file(&*self.file)
            .with_position(self.line, self.column)
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Operational mode of a context declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContextAction {
    /// Reads a value set by an ancestor.
    Get,
    /// Provides a value to descendants.
    Set,
}

impl ContextAction {
    /// The keyword name (`get` / `set`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
        }
    }

    /// Parses the keyword name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "get" => Some(Self::Get),
            "set" => Some(Self::Set),
            _ => None,
        }
    }
}

/// Visibility of a `context :set`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ContextScope {
    /// Only descendants can read the value.
    OnlyChildren,
    /// The declaring component and its descendants can read the value.
    #[default]
    SelfAndChildren,
}

impl ContextScope {
    /// The keyword name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OnlyChildren => "only_children",
            Self::SelfAndChildren => "self_and_children",
        }
    }

    /// Parses the keyword name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "only_children" => Some(Self::OnlyChildren),
            "self_and_children" => Some(Self::SelfAndChildren),
            _ => None,
        }
    }
}

/// A registered, validated declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct Assign {
    /// `property`, `data`, or `context`.
    pub kind: AssignKind,
    /// The declared name.
    pub name: String,
    /// The declared type (`any` for context gets).
    pub ty: AssignType,
    /// Documentation captured from the pending doc slot.
    pub doc: Option<String>,
    /// Validated options, including the internal `action` / `to` keys.
    pub options: Options,
    /// The option expression as the author wrote it.
    pub raw_options: Ast,
    /// Declaration site.
    pub site: Site,
}

impl Assign {
    /// Returns an option value.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&Ast> {
        self.options.get(key)
    }

    /// The context action, for context assigns.
    #[must_use]
    pub fn action(&self) -> Option<ContextAction> {
        self.option("action")
            .and_then(Ast::as_keyword)
            .and_then(ContextAction::from_name)
    }

    /// The context scope; absent means `self_and_children`.
    #[must_use]
    pub fn scope(&self) -> ContextScope {
        self.option("scope")
            .and_then(Ast::as_keyword)
            .and_then(ContextScope::from_name)
            .unwrap_or_default()
    }

    /// True for a `context :get`.
    #[must_use]
    pub fn is_context_get(&self) -> bool {
        self.kind == AssignKind::Context && self.action() == Some(ContextAction::Get)
    }

    /// True for a `context :set` of any scope.
    #[must_use]
    pub fn is_context_set(&self) -> bool {
        self.kind == AssignKind::Context && self.action() == Some(ContextAction::Set)
    }

    /// True for a `context :set` visible only to descendants.
    ///
    /// These never occupy a name in the declaring component.
    #[must_use]
    pub fn is_children_only(&self) -> bool {
        self.is_context_set() && self.scope() == ContextScope::OnlyChildren
    }

    /// The component a `context :get` reads from.
    #[must_use]
    pub fn from_component(&self) -> Option<&str> {
        self.option("from").and_then(Ast::as_symbol)
    }

    /// The name a `context :get` is exposed as, when renamed with `:as`.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.option("as").and_then(Ast::as_keyword)
    }

    /// The name this assign occupies in the component's namespace.
    #[must_use]
    pub fn slot_name(&self) -> &str {
        if self.is_context_get() {
            self.alias().unwrap_or(&self.name)
        } else {
            &self.name
        }
    }

    /// True if the property is marked `:required true`.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.option("required").and_then(Ast::as_bool).unwrap_or(false)
    }

    /// The `:default` expression, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&Ast> {
        self.option("default")
    }

    /// Renders the author-facing options as `key: value, ...`.
    ///
    /// Engine-owned keys (`action`, `to`) are left out. Returns an empty
    /// string when nothing else was written.
    #[must_use]
    pub fn render_options(&self) -> String {
        Options::from_expr(&self.raw_options)
            .map(|options| options.without(&INTERNAL_OPTIONS).render())
            .unwrap_or_default()
    }
}
