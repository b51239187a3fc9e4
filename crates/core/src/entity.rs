//! Entity trait: identity + continuity across snapshots.

/// Entity marker + minimal interface.
///
/// Catalog items and orders are keyed by identity in every read model and in
/// every per-item analytics map; this trait is the common seam for that.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
