//! Configuration for component definition.

/// Configuration for finalizing components.
///
/// Controls documentation generation and the context initializer check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaConfig {
    /// Whether to append the property documentation block.
    pub generate_docs: bool,

    /// Heading of the generated documentation block.
    pub docs_heading: String,

    /// Whether to warn about context sets without `init_context/1`.
    pub check_context_initializers: bool,

    /// Log post-check diagnostics as they are produced.
    ///
    /// Diagnostics are collected on the component either way.
    pub log_warnings: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            generate_docs: true,
            docs_heading: "Properties".to_string(),
            check_context_initializers: true,
            log_warnings: true,
        }
    }
}

impl SchemaConfig {
    /// Creates a configuration with docs and checks disabled.
    ///
    /// Only structural validation runs.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            generate_docs: false,
            check_context_initializers: false,
            log_warnings: false,
            ..Self::default()
        }
    }

    /// Creates a configuration that collects diagnostics without logging them.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            log_warnings: false,
            ..Self::default()
        }
    }

    /// Builder method to enable/disable documentation generation.
    #[must_use]
    pub fn with_generate_docs(mut self, generate: bool) -> Self {
        self.generate_docs = generate;
        self
    }

    /// Builder method to set the documentation heading.
    #[must_use]
    pub fn with_docs_heading(mut self, heading: impl Into<String>) -> Self {
        self.docs_heading = heading.into();
        self
    }

    /// Builder method to enable/disable the context initializer check.
    #[must_use]
    pub fn with_context_check(mut self, check: bool) -> Self {
        self.check_context_initializers = check;
        self
    }

    /// Builder method to enable/disable warning logs.
    #[must_use]
    pub fn with_log_warnings(mut self, log: bool) -> Self {
        self.log_warnings = log;
        self
    }
}
