//! Finalized components.

use std::sync::Arc;

use crate::capabilities::Capabilities;
use crate::check::Diagnostic;
use crate::schema::ComponentSchema;

/// A fully defined component.
///
/// Only produced by [`ComponentBuilder::finalize`](crate::ComponentBuilder::finalize),
/// so every value of this type passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct Component {
    pub(crate) name: String,
    pub(crate) file: Arc<str>,
    pub(crate) doc: Option<String>,
    pub(crate) schema: ComponentSchema,
    pub(crate) capabilities: Capabilities,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl Component {
    /// The component identity.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source file the component was defined in.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Documentation text, generated property block included.
    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Accessor views over the component's assigns.
    #[must_use]
    pub fn schema(&self) -> &ComponentSchema {
        &self.schema
    }

    /// Functions the component defines.
    #[must_use]
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Post-check findings.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
