//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are the same entity when their identifiers match, regardless of
/// the rest of their state (an `Item` listed at a new price is still that item).
pub trait Entity {
    /// Identifier type (opaque listing ids, numeric seller ids, ...).
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
