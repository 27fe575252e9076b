//! Per-instance change tracking for plan entities.

use std::fmt;

/// A named, serializable field of a change-tracked entity.
///
/// Every variant has a canonical name (as shown in error messages and
/// diagnostics) and a fixed lower-snake-case wire key.
pub trait Field: Copy + Eq + fmt::Debug + 'static {
    /// Every field of the entity, in wire emission order.
    const ALL: &'static [Self];

    /// Canonical field name, e.g. `WeightLoad`.
    fn name(self) -> &'static str;

    /// Wire key, e.g. `weight_load`.
    fn wire_key(self) -> &'static str;
}

/// Ordered set of fields modified since the last successful round-trip.
///
/// Insertion order is preserved and each field appears at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet<F> {
    fields: Vec<F>,
}

impl<F: Field> ChangeSet<F> {
    /// Creates an empty change set.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Records `field` as modified. Returns false if it was already recorded.
    pub fn mark(&mut self, field: F) -> bool {
        if self.contains(field) {
            return false;
        }
        self.fields.push(field);
        true
    }

    /// Writes `value` into `slot`, recording `field` first, unless the value
    /// is unchanged. Returns true if the slot was written.
    pub fn assign<T: PartialEq>(&mut self, field: F, slot: &mut T, value: T) -> bool {
        if *slot == value {
            return false;
        }
        self.mark(field);
        *slot = value;
        true
    }

    pub fn contains(&self, field: F) -> bool {
        self.fields.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        self.fields.iter().copied()
    }

    /// Canonical names of the modified fields, in modification order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(Field::name).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Forgets every recorded modification.
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

impl<F: Field> Default for ChangeSet<F> {
    fn default() -> Self {
        Self::new()
    }
}
