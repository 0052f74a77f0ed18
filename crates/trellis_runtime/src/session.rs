//! Session state for defining many components.
//!
//! Components are defined one at a time, in order. A file is loaded as a
//! unit: if any component in it fails, none of its components are kept.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use trellis_foundation::{Error, ErrorContext, ErrorKind, Result};
use trellis_language::{SourceFile, parse};
use trellis_schema::check::Diagnostic;
use trellis_schema::{Component, ComponentAnalyzer, SchemaConfig};

/// Every component defined so far, in definition order.
#[derive(Debug, Default)]
pub struct Session {
    config: SchemaConfig,
    components: Vec<Component>,
    by_name: HashMap<String, usize>,
}

impl Session {
    /// Creates an empty session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session with `config`.
    #[must_use]
    pub fn with_config(config: SchemaConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration applied to every component.
    #[must_use]
    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// Reads and loads a `.trl` file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, or see
    /// [`load_source`](Self::load_source).
    pub fn load_file(&mut self, path: &Path) -> Result<Vec<String>> {
        let text = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::Internal(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        })?;
        self.load_source(&SourceFile::new(path.display().to_string(), text))
    }

    /// Defines every component in `source`, returning their names.
    ///
    /// # Errors
    /// Returns the first parse or structural error, a parse error for any
    /// top-level form that is not a component, or `DuplicateComponent`.
    pub fn load_source(&mut self, source: &SourceFile) -> Result<Vec<String>> {
        let file = source.name();
        let in_file = |error: Error| match error.context {
            Some(_) => error,
            None => error.with_context(ErrorContext::new().with_file(&**file)),
        };

        let forms = parse(source.text()).map_err(in_file)?;
        let mut defined: Vec<Component> = Vec::new();
        for form in &forms {
            let Some(component) = ComponentAnalyzer::analyze(form, file, &self.config)? else {
                let span = form.span();
                return Err(in_file(Error::parse(
                    format!("expected a component: form, got {}", form.type_name()),
                    span.line,
                    span.column,
                )));
            };
            if self.by_name.contains_key(component.name())
                || defined.iter().any(|c| c.name() == component.name())
            {
                let span = form.span();
                return Err(Error::new(ErrorKind::DuplicateComponent(
                    component.name().to_string(),
                ))
                .with_context(
                    ErrorContext::new()
                        .with_file(&**file)
                        .with_position(span.line, span.column),
                ));
            }
            defined.push(component);
        }

        tracing::debug!(file = %file, components = defined.len(), "loaded source");

        let names = defined.iter().map(|c| c.name().to_string()).collect();
        for component in defined {
            self.by_name
                .insert(component.name().to_string(), self.components.len());
            self.components.push(component);
        }
        Ok(names)
    }

    /// Looks up a component by name.
    #[must_use]
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.by_name.get(name).map(|&i| &self.components[i])
    }

    /// All components, in definition order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Post-check findings across all components.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.components.iter().flat_map(Component::diagnostics)
    }
}
