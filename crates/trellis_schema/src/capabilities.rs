//! The function table of a component.

use std::collections::BTreeSet;

/// Functions (name and arity) a component defines.
///
/// Queried after the definition is complete, never during it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    functions: BTreeSet<(String, usize)>,
}

impl Capabilities {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name/arity`.
    pub fn define(&mut self, name: impl Into<String>, arity: usize) {
        self.functions.insert((name.into(), arity));
    }

    /// Returns true if `name/arity` is defined.
    #[must_use]
    pub fn exports(&self, name: &str, arity: usize) -> bool {
        self.functions.contains(&(name.to_string(), arity))
    }

    /// Iterates over `(name, arity)` in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.functions.iter().map(|(name, arity)| (name.as_str(), *arity))
    }

    /// Number of defined functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns true if no function is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
