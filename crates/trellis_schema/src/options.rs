//! Ordered option mappings.

use trellis_foundation::{Error, Result};
use trellis_language::Ast;
use trellis_language::pretty::render;

/// An ordered `key → value` option mapping with unique keys.
///
/// Values are kept as syntax. Keys are stored without the leading `:`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    entries: Vec<(String, Ast)>,
}

impl Options {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes a raw option expression.
    ///
    /// Accepted shapes are `nil`, a keyword list `[:k v ...]`, and a map
    /// with keyword keys `{:k v}`. Keys must be unique.
    ///
    /// # Errors
    /// Returns `InvalidOptionsShape` for any other shape.
    pub fn from_expr(expr: &Ast) -> Result<Self> {
        let mut options = Self::new();
        match expr {
            Ast::Nil(_) => {}
            Ast::Vector(elements, _) => {
                if elements.len() % 2 != 0 {
                    return Err(Error::invalid_options_shape(format!(
                        "expected keyword/value pairs, got {} forms in {}",
                        elements.len(),
                        render(expr)
                    )));
                }
                for pair in elements.chunks_exact(2) {
                    options.push_unique(&pair[0], &pair[1])?;
                }
            }
            Ast::Map(entries, _) => {
                for (key, value) in entries {
                    options.push_unique(key, value)?;
                }
            }
            other => {
                return Err(Error::invalid_options_shape(format!(
                    "expected a keyword list or map, got {}: {}",
                    other.type_name(),
                    render(other)
                )));
            }
        }
        Ok(options)
    }

    fn push_unique(&mut self, key: &Ast, value: &Ast) -> Result<()> {
        let Some(name) = key.as_keyword() else {
            return Err(Error::invalid_options_shape(format!(
                "option keys must be keywords, got {}",
                render(key)
            )));
        };
        if self.contains(name) {
            return Err(Error::invalid_options_shape(format!(
                "duplicate option :{name}"
            )));
        }
        self.entries.push((name.to_string(), value.clone()));
        Ok(())
    }

    /// Sets `key`, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: Ast) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Ast> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Ast)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a copy without the given keys.
    #[must_use]
    pub fn without(&self, keys: &[&str]) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| !keys.contains(&k.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Renders as `key: value, key: value`.
    #[must_use]
    pub fn render(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}: {}", render(v)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
