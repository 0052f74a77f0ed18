//! Per-component assign registry.
//!
//! The `AssignRegistry` tracks:
//! - One ordered sequence per assign kind (declaration order)
//! - A flat name index used for uniqueness across all three kinds

use std::collections::HashMap;

use trellis_foundation::{AssignKind, DuplicateHint, Error, ErrorKind, Result};

use crate::assign::Assign;

/// Accumulates the assigns of one component while it is being defined.
#[derive(Debug, Default)]
pub struct AssignRegistry {
    /// Name slot to (kind, index into that kind's sequence).
    names: HashMap<String, (AssignKind, usize)>,
    properties: Vec<Assign>,
    data: Vec<Assign>,
    contexts: Vec<Assign>,
}

impl AssignRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an assign, enforcing name uniqueness.
    ///
    /// A `context :set` scoped `:only_children` skips the check and never
    /// occupies a name slot.
    ///
    /// # Errors
    /// Returns `DuplicateName` if the slot is already taken.
    pub fn register(&mut self, assign: Assign) -> Result<&Assign> {
        let kind = assign.kind;
        let index = self.sequence(kind).len();

        if !assign.is_children_only() {
            let slot = assign.slot_name();
            if let Some(existing) = self.get(slot) {
                return Err(Self::duplicate(slot, existing));
            }
            self.names.insert(slot.to_string(), (kind, index));
        }

        tracing::debug!(
            kind = %kind,
            name = %assign.name,
            ty = %assign.ty,
            line = assign.site.line,
            "registered assign"
        );

        let sequence = self.sequence_mut(kind);
        sequence.push(assign);
        Ok(&sequence[index])
    }

    fn duplicate(slot: &str, existing: &Assign) -> Error {
        let hint = if existing.is_context_set() {
            Some(DuplicateHint::OnlyChildrenScope)
        } else if existing.is_context_get() {
            Some(DuplicateHint::RenameWithAs)
        } else {
            None
        };
        Error::new(ErrorKind::DuplicateName {
            name: slot.to_string(),
            existing_kind: existing.kind,
            existing_line: existing.site.line,
            hint,
        })
    }

    /// Returns the assign occupying a name slot.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Assign> {
        let (kind, index) = self.names.get(name)?;
        self.sequence(*kind).get(*index)
    }

    /// Returns true if a name slot is taken.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Assigns of one kind, in declaration order.
    #[must_use]
    pub fn sequence(&self, kind: AssignKind) -> &[Assign] {
        match kind {
            AssignKind::Property => &self.properties,
            AssignKind::Data => &self.data,
            AssignKind::Context => &self.contexts,
        }
    }

    fn sequence_mut(&mut self, kind: AssignKind) -> &mut Vec<Assign> {
        match kind {
            AssignKind::Property => &mut self.properties,
            AssignKind::Data => &mut self.data,
            AssignKind::Context => &mut self.contexts,
        }
    }

    /// Total number of registered assigns, slotless ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len() + self.data.len() + self.contexts.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the registry, returning the three sequences.
    #[must_use]
    pub fn into_sequences(self) -> (Vec<Assign>, Vec<Assign>, Vec<Assign>) {
        (self.properties, self.data, self.contexts)
    }
}
