//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Products and categories are entities: two products with the same name and
/// price are still different catalog entries.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
