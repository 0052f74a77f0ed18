//! Two-phase component definition.
//!
//! A [`ComponentBuilder`] receives declaration calls in source order. Each
//! call is validated and registered before it returns. The first structural
//! error aborts the definition: later declarations return that same error
//! and [`ComponentBuilder::finalize`] refuses to produce a [`Component`].

use std::sync::Arc;

use trellis_foundation::{AssignKind, Error, ErrorContext, Result};
use trellis_language::pretty::render;
use trellis_language::{Ast, Span};

use crate::assign::{Assign, ContextAction, Site};
use crate::capabilities::Capabilities;
use crate::check::check_context_initializers;
use crate::component::Component;
use crate::config::SchemaConfig;
use crate::docs::{attach, property_docs};
use crate::registry::AssignRegistry;
use crate::schema::ComponentSchema;
use crate::validate::{Declaration, validate};

/// Collects the declarations of one component.
#[derive(Debug)]
pub struct ComponentBuilder {
    name: String,
    file: Arc<str>,
    config: SchemaConfig,
    moduledoc: Option<String>,
    pending_doc: Option<String>,
    registry: AssignRegistry,
    capabilities: Capabilities,
    failure: Option<Error>,
}

impl ComponentBuilder {
    /// Starts defining component `name` from `file`.
    #[must_use]
    pub fn new(name: impl Into<String>, file: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            config: SchemaConfig::default(),
            moduledoc: None,
            pending_doc: None,
            registry: AssignRegistry::new(),
            capabilities: Capabilities::new(),
            failure: None,
        }
    }

    /// Builder method to set the configuration.
    #[must_use]
    pub fn with_config(mut self, config: SchemaConfig) -> Self {
        self.config = config;
        self
    }

    /// Builder method to set the component documentation.
    #[must_use]
    pub fn with_moduledoc(mut self, doc: impl Into<String>) -> Self {
        self.moduledoc = Some(doc.into());
        self
    }

    /// The component identity.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attaches documentation to the next declaration.
    ///
    /// A second call before any declaration replaces the first. The next
    /// declaration consumes it whether or not it succeeds.
    pub fn doc(&mut self, text: impl Into<String>) {
        self.pending_doc = Some(text.into());
    }

    /// Records that the component defines `name/arity`.
    pub fn define_function(&mut self, name: impl Into<String>, arity: usize) {
        self.capabilities.define(name, arity);
    }

    /// Declares a `property` or `data` assign.
    ///
    /// Context assigns go through [`context`](Self::context), which
    /// supplies their action.
    ///
    /// # Errors
    /// Returns the first validation or registration error, located at `span`,
    /// or the error that already aborted this component.
    pub fn declare(
        &mut self,
        kind: AssignKind,
        name: &Ast,
        ty: Option<&Ast>,
        options: &Ast,
        span: Span,
    ) -> Result<&Assign> {
        self.register(kind, None, name, ty, options, span)
    }

    /// Declares a `property`.
    ///
    /// # Errors
    /// See [`declare`](Self::declare).
    pub fn property(&mut self, name: &Ast, ty: &Ast, options: &Ast, span: Span) -> Result<&Assign> {
        self.declare(AssignKind::Property, name, Some(ty), options, span)
    }

    /// Declares a `data` assign.
    ///
    /// # Errors
    /// See [`declare`](Self::declare).
    pub fn data(&mut self, name: &Ast, ty: &Ast, options: &Ast, span: Span) -> Result<&Assign> {
        self.declare(AssignKind::Data, name, Some(ty), options, span)
    }

    /// Declares a `context` assign with an action token (`:get` / `:set`).
    ///
    /// # Errors
    /// Returns `InvalidContextAction` for any other action,
    /// `InvalidContextUsage` for a typed `:get` whatever the type token, and
    /// otherwise the first validation or registration error.
    pub fn context(
        &mut self,
        action: &Ast,
        name: &Ast,
        ty: Option<&Ast>,
        options: &Ast,
        span: Span,
    ) -> Result<&Assign> {
        self.ensure_open()?;
        let Some(action) = action.as_keyword().and_then(ContextAction::from_name) else {
            return Err(self.reject(Error::invalid_context_action(render(action)), span));
        };
        if let (ContextAction::Get, Some(ty)) = (action, ty) {
            return Err(self.reject(Error::typed_context_get(render(name), render(ty)), span));
        }
        self.register(AssignKind::Context, Some(action), name, ty, options, span)
    }

    /// Declares a `context :get`.
    ///
    /// # Errors
    /// See [`context`](Self::context).
    pub fn context_get(&mut self, name: &Ast, options: &Ast, span: Span) -> Result<&Assign> {
        self.register(
            AssignKind::Context,
            Some(ContextAction::Get),
            name,
            None,
            options,
            span,
        )
    }

    /// Declares a typed `context :set`.
    ///
    /// # Errors
    /// See [`context`](Self::context).
    pub fn context_set(
        &mut self,
        name: &Ast,
        ty: &Ast,
        options: &Ast,
        span: Span,
    ) -> Result<&Assign> {
        self.register(
            AssignKind::Context,
            Some(ContextAction::Set),
            name,
            Some(ty),
            options,
            span,
        )
    }

    fn register(
        &mut self,
        kind: AssignKind,
        action: Option<ContextAction>,
        name: &Ast,
        ty: Option<&Ast>,
        options: &Ast,
        span: Span,
    ) -> Result<&Assign> {
        self.ensure_open()?;
        let doc = self.pending_doc.take();
        let index = self.registry.sequence(kind).len();
        match self.admit(kind, action, name, ty, options, span, doc) {
            Ok(()) => Ok(&self.registry.sequence(kind)[index]),
            Err(error) => Err(self.reject(error, span)),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn admit(
        &mut self,
        kind: AssignKind,
        action: Option<ContextAction>,
        name: &Ast,
        ty: Option<&Ast>,
        options: &Ast,
        span: Span,
        doc: Option<String>,
    ) -> Result<()> {
        let validated = validate(&Declaration {
            kind,
            name,
            ty,
            options,
            action,
            owner: &self.name,
        })?;

        let assign = Assign {
            kind,
            name: validated.name,
            ty: validated.ty,
            doc,
            options: validated.options,
            raw_options: options.clone(),
            site: Site::new(Arc::clone(&self.file), span),
        };
        self.registry.register(assign)?;
        Ok(())
    }

    fn ensure_open(&self) -> Result<()> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    /// Locates `error`, drops the pending doc, and aborts the component.
    fn reject(&mut self, error: Error, span: Span) -> Error {
        let error = self.locate(error, span);
        self.pending_doc = None;
        self.failure = Some(error.clone());
        error
    }

    fn error_context(&self, span: Span) -> ErrorContext {
        ErrorContext::new()
            .with_file(&*self.file)
            .with_position(span.line, span.column)
            .with_component(&self.name)
    }

    fn locate(&self, error: Error, span: Span) -> Error {
        error.with_context(self.error_context(span))
    }

    /// Ends the definition phase.
    ///
    /// Computes the accessor views, attaches the generated documentation,
    /// and runs the post-checks. Their findings are returned on the
    /// component and never abort it.
    ///
    /// # Errors
    /// Returns the error that aborted the definition, if any declaration
    /// failed.
    pub fn finalize(self) -> Result<Component> {
        if let Some(error) = self.failure {
            return Err(error);
        }

        let schema = ComponentSchema::finalize(self.registry);

        let mut doc = self.moduledoc;
        if self.config.generate_docs {
            if let Some(block) = property_docs(&self.config.docs_heading, schema.list_properties()) {
                doc = Some(attach(doc.as_deref(), &block));
            }
        }

        let diagnostics = if self.config.check_context_initializers {
            check_context_initializers(&self.name, &schema, &self.capabilities)
        } else {
            Vec::new()
        };
        if self.config.log_warnings {
            for diagnostic in &diagnostics {
                tracing::warn!(
                    component = %self.name,
                    assign = %diagnostic.assign,
                    file = %diagnostic.site.file,
                    line = diagnostic.site.line,
                    "{}",
                    diagnostic.message
                );
            }
        }

        tracing::debug!(component = %self.name, "finalized component");

        Ok(Component {
            name: self.name,
            file: self.file,
            doc,
            schema,
            capabilities: self.capabilities,
            diagnostics,
        })
    }
}
