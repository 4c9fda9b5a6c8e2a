//! Keyed domain records.
//!
//! A catalog product is an entity: it is stored and replaced by its
//! [`ProductId`](crate::ProductId), and a record with the same id is the same
//! product even when every other field differs.

/// A record addressed by a stable key.
pub trait Entity {
    /// Key type; must be usable as a map key.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Whether `other` is a version of the same record (same key).
    fn same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
