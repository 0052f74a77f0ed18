//! Serializable summaries of finalized components.

use serde::Serialize;

use trellis_foundation::{AssignKind, AssignType};
use trellis_language::pretty::render;
use trellis_schema::{Assign, Component, Diagnostic};

/// Summary of one component.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComponentReport {
    /// Component identity.
    pub name: String,
    /// Source file.
    pub file: String,
    /// Documentation, generated block included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Properties in declaration order.
    pub properties: Vec<AssignReport>,
    /// Data assigns in declaration order.
    pub data: Vec<AssignReport>,
    /// Context gets.
    pub context_gets: Vec<AssignReport>,
    /// Context sets of every scope.
    pub context_sets: Vec<AssignReport>,
    /// Names resolvable as context inside the component.
    pub context_assigns: Vec<String>,
    /// Defined functions as `name/arity`.
    pub functions: Vec<String>,
    /// Post-check findings.
    pub warnings: Vec<WarningReport>,
}

/// Summary of one assign.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssignReport {
    /// Assign kind.
    pub kind: AssignKind,
    /// Declared name.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: AssignType,
    /// Captured documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Options with values rendered as source text.
    pub options: Vec<OptionReport>,
    /// Declaration line.
    pub line: u32,
}

/// One option entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptionReport {
    /// Option key.
    pub key: String,
    /// Option value as source text.
    pub value: String,
}

/// One post-check finding.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WarningReport {
    /// The assign concerned.
    pub assign: String,
    /// Declaration line of the assign.
    pub line: u32,
    /// Message.
    pub message: String,
}

impl From<&Assign> for AssignReport {
    fn from(assign: &Assign) -> Self {
        Self {
            kind: assign.kind,
            name: assign.name.clone(),
            ty: assign.ty,
            doc: assign.doc.clone(),
            options: assign
                .options
                .iter()
                .map(|(key, value)| OptionReport {
                    key: key.to_string(),
                    value: render(value),
                })
                .collect(),
            line: assign.site.line,
        }
    }
}

impl From<&Diagnostic> for WarningReport {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            assign: diagnostic.assign.clone(),
            line: diagnostic.site.line,
            message: diagnostic.message.clone(),
        }
    }
}

impl From<&Component> for ComponentReport {
    fn from(component: &Component) -> Self {
        let schema = component.schema();
        Self {
            name: component.name().to_string(),
            file: component.file().to_string(),
            doc: component.doc().map(str::to_string),
            properties: reports(schema.list_properties()),
            data: reports(schema.list_data()),
            context_gets: reports(schema.list_context_gets()),
            context_sets: reports(schema.list_context_sets()),
            context_assigns: schema
                .list_context_assigns()
                .iter()
                .map(|a| a.slot_name().to_string())
                .collect(),
            functions: component
                .capabilities()
                .iter()
                .map(|(name, arity)| format!("{name}/{arity}"))
                .collect(),
            warnings: component
                .diagnostics()
                .iter()
                .map(WarningReport::from)
                .collect(),
        }
    }
}

fn reports<'a>(assigns: impl IntoIterator<Item = &'a Assign>) -> Vec<AssignReport> {
    assigns.into_iter().map(AssignReport::from).collect()
}

impl ComponentReport {
    /// Serializes reports as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(reports: &[Self]) -> serde_json::Result<String> {
        serde_json::to_string_pretty(reports)
    }

    /// One-line human-readable summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}: {} properties, {} data, {} context gets, {} context sets",
            self.name,
            self.properties.len(),
            self.data.len(),
            self.context_gets.len(),
            self.context_sets.len()
        )
    }
}
