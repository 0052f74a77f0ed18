//! Finalized, read-only views over a component's assigns.
//!
//! A [`ComponentSchema`] is computed exactly once from a completed
//! [`AssignRegistry`]. Views are persistent collections so a schema can be
//! cloned and shared freely.

use im::{HashMap, HashSet, Vector};

use crate::assign::Assign;
use crate::registry::AssignRegistry;

/// The derived accessor views of a component.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComponentSchema {
    properties: Vector<Assign>,
    property_names: HashSet<String>,
    properties_by_name: HashMap<String, Assign>,
    data: Vector<Assign>,
    context_gets: Vector<Assign>,
    context_sets: Vector<Assign>,
    context_sets_in_scope: Vector<Assign>,
    context_assigns: Vector<Assign>,
}

impl ComponentSchema {
    /// Computes every view from a completed registry.
    #[must_use]
    pub fn finalize(registry: AssignRegistry) -> Self {
        let (properties, data, contexts) = registry.into_sequences();

        let (context_gets, context_sets): (Vector<Assign>, Vector<Assign>) =
            contexts.into_iter().partition(Assign::is_context_get);
        let context_sets_in_scope: Vector<Assign> = context_sets
            .iter()
            .filter(|assign| !assign.is_children_only())
            .cloned()
            .collect();
        let mut context_assigns = context_gets.clone();
        context_assigns.append(context_sets_in_scope.clone());

        let properties: Vector<Assign> = properties.into_iter().collect();
        let property_names = properties.iter().map(|p| p.name.clone()).collect();
        let properties_by_name = properties
            .iter()
            .map(|p| (p.name.clone(), p.clone()))
            .collect();

        tracing::debug!(
            properties = properties.len(),
            data = data.len(),
            context_gets = context_gets.len(),
            context_sets = context_sets.len(),
            "finalized schema"
        );

        Self {
            properties,
            property_names,
            properties_by_name,
            data: data.into_iter().collect(),
            context_gets,
            context_sets,
            context_sets_in_scope,
            context_assigns,
        }
    }

    /// All properties, in declaration order.
    #[must_use]
    pub fn list_properties(&self) -> &Vector<Assign> {
        &self.properties
    }

    /// Returns true if a property with this name exists.
    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.property_names.contains(name)
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Assign> {
        self.properties_by_name.get(name)
    }

    /// All data assigns, in declaration order.
    #[must_use]
    pub fn list_data(&self) -> &Vector<Assign> {
        &self.data
    }

    /// Every `context :get`.
    #[must_use]
    pub fn list_context_gets(&self) -> &Vector<Assign> {
        &self.context_gets
    }

    /// Every `context :set`, `only_children` ones included.
    #[must_use]
    pub fn list_context_sets(&self) -> &Vector<Assign> {
        &self.context_sets
    }

    /// The `context :set`s the component itself can read.
    #[must_use]
    pub fn list_context_sets_in_scope(&self) -> &Vector<Assign> {
        &self.context_sets_in_scope
    }

    /// Context names resolvable inside the component: gets, then in-scope sets.
    #[must_use]
    pub fn list_context_assigns(&self) -> &Vector<Assign> {
        &self.context_assigns
    }

    /// Iterates over every assign: properties, data, then context.
    pub fn iter(&self) -> impl Iterator<Item = &Assign> {
        self.properties
            .iter()
            .chain(self.data.iter())
            .chain(self.context_gets.iter())
            .chain(self.context_sets.iter())
    }
}
