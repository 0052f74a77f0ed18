//! Error types for Trellis.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every structural error aborts the component definition it occurred in;
//! the [`ErrorContext`] records where.

use std::fmt;

use thiserror::Error;

use crate::types::{AssignKind, AssignType};

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Trellis operations.
#[derive(Clone, Debug, Error)]
#[error("{}{kind}", location_prefix(.context))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

fn location_prefix(context: &Option<ErrorContext>) -> String {
    match context {
        Some(ctx) if ctx.file.is_some() || ctx.line.is_some() => format!("{ctx}: "),
        _ => String::new(),
    }
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Returns the declaration line, if known.
    #[must_use]
    pub fn line(&self) -> Option<u32> {
        self.context.as_ref().and_then(|ctx| ctx.line)
    }

    /// Creates an invalid name error for the offending token.
    #[must_use]
    pub fn invalid_name(found: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidName {
            found: found.into(),
        })
    }

    /// Creates an error for a type token outside the closed set.
    #[must_use]
    pub fn unknown_type(found: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidType {
            found: Some(found.into()),
        })
    }

    /// Creates an error for a declaration that omitted its type.
    #[must_use]
    pub fn missing_type() -> Self {
        Self::new(ErrorKind::InvalidType { found: None })
    }

    /// Creates an invalid options shape error.
    #[must_use]
    pub fn invalid_options_shape(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidOptionsShape {
            reason: reason.into(),
        })
    }

    /// Creates an unknown option error.
    #[must_use]
    pub fn unknown_options(unknown: Vec<String>, allowed: &[&str]) -> Self {
        Self::new(ErrorKind::UnknownOption {
            unknown,
            allowed: allowed.iter().map(|s| (*s).to_string()).collect(),
        })
    }

    /// Creates an invalid option value error.
    #[must_use]
    pub fn invalid_option_value(
        option: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::InvalidOptionValue {
            option: option.into(),
            expected: expected.into(),
            actual: actual.into(),
        })
    }

    /// Creates a missing required option error.
    #[must_use]
    pub fn missing_options(options: &[&str]) -> Self {
        let names: Vec<String> = options.iter().map(|o| format!(":{o}")).collect();
        Self::new(ErrorKind::MissingRequiredOption {
            option: options.join(", "),
            detail: format!("the following options are required: [{}]", names.join(", ")),
        })
    }

    /// Creates the error raised by an untyped `context :set`.
    #[must_use]
    pub fn set_requires_type() -> Self {
        Self::new(ErrorKind::MissingRequiredOption {
            option: "type".to_string(),
            detail: "action :set requires the type of the assign as third argument".to_string(),
        })
    }

    /// Creates an invalid context action error.
    #[must_use]
    pub fn invalid_context_action(found: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidContextAction {
            found: found.into(),
        })
    }

    /// Creates the error raised by a typed `context :get`.
    #[must_use]
    pub fn typed_context_get(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidContextUsage {
            name: name.into(),
            ty: ty.into(),
        })
    }

    /// Creates a parse error at the given position.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            line,
            column,
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, Error)]
pub enum ErrorKind {
    /// Declaration target is not a bare identifier.
    #[error("invalid assign name. Expected a variable name, got: {found}")]
    InvalidName {
        /// Rendering of the offending token.
        found: String,
    },

    /// Type missing, or not in the closed set.
    #[error("{}", invalid_type_message(.found))]
    InvalidType {
        /// Rendering of the offending type token; `None` when it was omitted.
        found: Option<String>,
    },

    /// Options are not a well-formed key/value mapping.
    #[error("invalid options: {reason}")]
    InvalidOptionsShape {
        /// Why the options were rejected.
        reason: String,
    },

    /// One or more option keys outside the allowed set.
    #[error("{}", unknown_option_message(.unknown, .allowed))]
    UnknownOption {
        /// The offending keys, in the order written.
        unknown: Vec<String>,
        /// The keys allowed for this declaration.
        allowed: Vec<String>,
    },

    /// An option value failed its shape check.
    #[error("invalid value for option :{option}. Expected {expected}, got: {actual}")]
    InvalidOptionValue {
        /// The option key.
        option: String,
        /// Description of the expected shape.
        expected: String,
        /// Rendering of the actual value.
        actual: String,
    },

    /// A required option (or the type of a `context :set`) is absent.
    #[error("{detail}")]
    MissingRequiredOption {
        /// The missing option name(s).
        option: String,
        /// Human-readable message.
        detail: String,
    },

    /// The first argument of a context declaration is neither `:get` nor `:set`.
    #[error("invalid context action. Expected :get or :set, got: {found}")]
    InvalidContextAction {
        /// Rendering of the offending token.
        found: String,
    },

    /// A type was supplied for a `context :get`.
    #[error(
        "cannot specify type {ty} for context :get {name}; the type is owned by whichever component performs the matching :set"
    )]
    InvalidContextUsage {
        /// The context assign name.
        name: String,
        /// Rendering of the supplied type token, known type or not.
        ty: String,
    },

    /// A name collides with an existing, non-exempt assign.
    #[error(
        "cannot use name \"{name}\". There's already a {existing_kind} assign with the same name at line {existing_line}.{}",
        hint_suffix(.hint)
    )]
    DuplicateName {
        /// The colliding name.
        name: String,
        /// Kind of the assign that already holds the name.
        existing_kind: AssignKind,
        /// Declaration line of the assign that already holds the name.
        existing_line: u32,
        /// Suggested fix, when one applies.
        hint: Option<DuplicateHint>,
    },

    /// Syntax error in declaration source.
    #[error("parse error at {line}:{column}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// A component with this name was already defined in the session.
    #[error("component {0} is already defined")]
    DuplicateComponent(String),

    /// Internal error (I/O and other unexpected failures).
    #[error("internal error: {0}")]
    Internal(String),
}

/// How to resolve a [`ErrorKind::DuplicateName`] conflict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuplicateHint {
    /// The existing assign is a `context :set`; scope it to children.
    OnlyChildrenScope,
    /// The existing assign is a `context :get`; rename it with `:as`.
    RenameWithAs,
}

impl fmt::Display for DuplicateHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnlyChildrenScope => write!(
                f,
                "if you only need this context assign in the child components, \
                 you can set option :scope as :only_children to solve the issue"
            ),
            Self::RenameWithAs => write!(
                f,
                "you can use the :as option to set another name for the context assign"
            ),
        }
    }
}

fn invalid_type_message(found: &Option<String>) -> String {
    match found {
        Some(ty) => format!(
            "invalid type {ty}. Expected one of {}",
            AssignType::allowed_list()
        ),
        None => format!(
            "missing type. Expected one of {}",
            AssignType::allowed_list()
        ),
    }
}

fn unknown_option_message(unknown: &[String], allowed: &[String]) -> String {
    let allowed: Vec<String> = allowed.iter().map(|o| format!(":{o}")).collect();
    let allowed = format!("[{}]", allowed.join(", "));
    match unknown {
        [single] => format!("unknown option :{single}. Available options: {allowed}"),
        many => {
            let names: Vec<String> = many.iter().map(|o| format!(":{o}")).collect();
            format!(
                "unknown options [{}]. Available options: {allowed}",
                names.join(", ")
            )
        }
    }
}

fn hint_suffix(hint: &Option<DuplicateHint>) -> String {
    match hint {
        Some(hint) => format!("\nHint: {hint}."),
        None => String::new(),
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Source file of the component definition.
    pub file: Option<String>,
    /// Line number in source.
    pub line: Option<u32>,
    /// Column number in source.
    pub column: Option<u32>,
    /// The component being defined.
    pub component: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Sets the component being defined.
    #[must_use]
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.file.as_deref().unwrap_or("nofile");
        write!(f, "{file}")?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
            if let Some(col) = self.column {
                write!(f, ":{col}")?;
            }
        }
        Ok(())
    }
}
