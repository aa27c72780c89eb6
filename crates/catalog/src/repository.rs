use goldline_core::{Entity, NotFoundError, ValidationError, ViolationKind};

use crate::item::CatalogItem;

/// Authoritative in-memory set of catalog items.
///
/// # Invariants
/// - every stored item passed `CatalogItem::validate`;
/// - no two stored items share an [`Entity::id`];
/// - `list()` is insertion order; removals keep the relative order of the rest.
///
/// The inner collection is never handed out mutably, so the only way in is
/// `add` and the only way out is `remove_by_id`.
#[derive(Debug, Clone, Default)]
pub struct CatalogRepository {
    items: Vec<CatalogItem>,
}

impl CatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository by adding each item in turn.
    ///
    /// Stops at the first rejected item.
    pub fn with_items(items: impl IntoIterator<Item = CatalogItem>) -> Result<Self, ValidationError> {
        let mut repo = Self::new();
        for item in items {
            repo.add(item)?;
        }
        Ok(repo)
    }

    /// Current items, oldest first.
    pub fn list(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append `candidate` if all its fields are valid and its id is free.
    ///
    /// Ids are compared exactly as given. A colliding id is rejected, never
    /// overwritten. On error the repository is untouched.
    pub fn add(&mut self, candidate: CatalogItem) -> Result<(), ValidationError> {
        let mut violations = candidate.field_violations();
        if self.contains(candidate.id()) {
            violations.push("id", ViolationKind::Duplicate);
        }

        if let Err(err) = violations.into_result() {
            tracing::info!(
                id = %candidate.id,
                violations = err.violations().len(),
                duplicate = err.is_duplicate(),
                "catalog item rejected"
            );
            return Err(err);
        }

        tracing::debug!(id = %candidate.id, "catalog item added");
        self.items.push(candidate);
        Ok(())
    }

    /// Remove the item with `id` and hand it back.
    pub fn remove_by_id(&mut self, id: &str) -> Result<CatalogItem, NotFoundError> {
        let Some(pos) = self.items.iter().position(|item| item.id() == id) else {
            tracing::warn!(id = %id, "remove requested for unknown catalog item");
            return Err(NotFoundError::new(id));
        };

        // `remove`, not `swap_remove`: the order of the others must not change.
        let removed = self.items.remove(pos);
        tracing::debug!(id = %id, "catalog item removed");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(id: &str) -> CatalogItem {
        CatalogItem::new(id, "AG 925", 5.2, "Кольцо")
    }

    fn ids(repo: &CatalogRepository) -> Vec<&str> {
        repo.list().iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut repo = CatalogRepository::new();
        repo.add(ring("B")).unwrap();
        repo.add(ring("A")).unwrap();
        repo.add(ring("C")).unwrap();

        assert_eq!(ids(&repo), vec!["B", "A", "C"]);
    }

    #[test]
    fn duplicate_id_is_rejected_and_state_kept() {
        let mut repo = CatalogRepository::new();
        repo.add(ring("ART001")).unwrap();
        let before = repo.list().to_vec();

        let replacement = CatalogItem::new("ART001", "AU 750", 9.9, "Серьги");
        let err = repo.add(replacement).unwrap_err();

        assert!(err.is_duplicate());
        assert!(err.has("id", ViolationKind::Duplicate));
        assert_eq!(repo.list(), before.as_slice());
    }

    #[test]
    fn invalid_fields_and_collision_are_reported_together() {
        let mut repo = CatalogRepository::new();
        repo.add(ring("ART001")).unwrap();

        let err = repo
            .add(CatalogItem::new("ART001", "", -3.0, "Кольцо"))
            .unwrap_err();

        assert_eq!(err.violations().len(), 3);
        assert!(err.has("metal_code", ViolationKind::Empty));
        assert!(err.has("weight_grams", ViolationKind::NotPositive));
        assert!(err.is_duplicate());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn zero_weight_is_rejected() {
        let mut repo = CatalogRepository::new();
        let err = repo.add(CatalogItem::new("ART002", "AU 585", 0.0, "Цепочка")).unwrap_err();
        assert!(err.has("weight_grams", ViolationKind::NotPositive));
        assert!(repo.is_empty());
    }

    #[test]
    fn ids_are_not_normalized() {
        let mut repo = CatalogRepository::new();
        repo.add(ring("art001")).unwrap();
        assert!(repo.add(ring("ART001")).is_ok());
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut repo = CatalogRepository::with_items([ring("A"), ring("B"), ring("C"), ring("D")]).unwrap();

        let removed = repo.remove_by_id("B").unwrap();

        assert_eq!(removed.id, "B");
        assert_eq!(ids(&repo), vec!["A", "C", "D"]);
    }

    #[test]
    fn remove_unknown_reports_not_found_and_keeps_state() {
        let mut repo = CatalogRepository::with_items([ring("A"), ring("B")]).unwrap();

        let err = repo.remove_by_id("Z").unwrap_err();

        assert_eq!(err, NotFoundError::new("Z"));
        assert_eq!(ids(&repo), vec!["A", "B"]);
    }

    #[test]
    fn removed_id_can_be_reused() {
        let mut repo = CatalogRepository::with_items([ring("A"), ring("B")]).unwrap();
        repo.remove_by_id("A").unwrap();

        let replacement = CatalogItem::new("A", "PT 950", 7.1, "Запонки");
        repo.add(replacement.clone()).unwrap();

        assert_eq!(ids(&repo), vec!["B", "A"]);
        assert_eq!(repo.get("A"), Some(&replacement));
    }

    #[test]
    fn with_items_rejects_duplicates() {
        let err = CatalogRepository::with_items([ring("A"), ring("A")]).unwrap_err();
        assert!(err.is_duplicate());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn valid_item() -> impl Strategy<Value = CatalogItem> {
            (
                "[A-Z]{3}[0-9]{3}",
                "(AG|AU|PT) (585|750|925|950|999)",
                0.01f64..500.0,
                "[a-zа-я]{1,12}",
            )
                .prop_map(|(id, metal, w, kind)| CatalogItem::new(id, metal, w, kind))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// A fresh valid item lands exactly once, after everything already there.
            #[test]
            fn add_appends_exactly_once(
                existing in proptest::collection::vec(valid_item(), 0..10),
                candidate in valid_item(),
            ) {
                let mut repo = CatalogRepository::new();
                for item in existing {
                    let _ = repo.add(item);
                }
                prop_assume!(!repo.contains(&candidate.id));
                let before = repo.list().to_vec();

                repo.add(candidate.clone()).unwrap();

                prop_assert_eq!(repo.len(), before.len() + 1);
                prop_assert_eq!(&repo.list()[..before.len()], before.as_slice());
                prop_assert_eq!(repo.list().last(), Some(&candidate));
                prop_assert_eq!(repo.list().iter().filter(|i| i.id == candidate.id).count(), 1);
            }

            /// Re-adding any stored id never changes the list.
            #[test]
            fn duplicate_add_never_changes_list(
                items in proptest::collection::vec(valid_item(), 1..10),
                pick in any::<prop::sample::Index>(),
                other in valid_item(),
            ) {
                let mut repo = CatalogRepository::new();
                for item in items {
                    let _ = repo.add(item);
                }
                let before = repo.list().to_vec();
                let target = pick.get(&before).id.clone();

                let err = repo.add(CatalogItem { id: target, ..other }).unwrap_err();

                prop_assert!(err.is_duplicate());
                prop_assert_eq!(repo.list(), before.as_slice());
            }

            /// Non-positive weight fails whatever the other fields hold.
            #[test]
            fn non_positive_weight_always_fails(
                item in valid_item(),
                w in -1.0e6f64..=0.0,
            ) {
                let mut repo = CatalogRepository::new();
                let err = repo.add(CatalogItem { weight_grams: w, ..item }).unwrap_err();
                prop_assert!(err.has("weight_grams", ViolationKind::NotPositive));
                prop_assert!(repo.is_empty());
            }
        }
    }
}
