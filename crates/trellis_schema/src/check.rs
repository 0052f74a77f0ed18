//! Checks run once a component definition is complete.
//!
//! These never fail a definition. Findings are returned as [`Diagnostic`]s.

use std::fmt;

use crate::assign::Site;
use crate::capabilities::Capabilities;
use crate::schema::ComponentSchema;

/// Name of the context initializer.
pub const INIT_CONTEXT: &str = "init_context";

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Worth knowing; the component is usable.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A non-fatal finding about a finished component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// How serious it is.
    pub severity: Severity,
    /// The assign the finding is about.
    pub assign: String,
    /// Where the assign was declared.
    pub site: Site,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.site, self.severity, self.message)
    }
}

/// Warns once per `context :set` when `init_context/1` is not defined.
#[must_use]
pub fn check_context_initializers(
    component: &str,
    schema: &ComponentSchema,
    capabilities: &Capabilities,
) -> Vec<Diagnostic> {
    if capabilities.exports(INIT_CONTEXT, 1) {
        return Vec::new();
    }
    schema
        .list_context_sets()
        .iter()
        .map(|assign| Diagnostic {
            severity: Severity::Warning,
            assign: assign.name.clone(),
            site: assign.site.clone(),
            message: format!(
                "context assign \"{}\" not initialized. You should implement an \
                 {INIT_CONTEXT}/1 callback and initialize its value in {component} \
                 by calling put(context, :{}, ...)",
                assign.name, assign.name
            ),
        })
        .collect()
}
