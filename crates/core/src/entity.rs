//! Entity trait: identity that survives relocation and state changes.

/// Entity marker + minimal interface.
///
/// An item keeps its identifier while it moves between storage locations, so
/// "same instance" checks must go through `id()` rather than value equality.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
