//! Entity trait: records that are told apart by identity, not by value.

/// Something with a stable business key.
///
/// Two entities with the same id are the same record, even if other fields
/// differ. `CatalogRepository` keys lookups and its uniqueness check on it.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
