use serde::{Deserialize, Serialize};

use goldline_core::validate::{non_empty, positive};
use goldline_core::{Entity, ValidationError, ViolationKind, Violations};

/// One inventory record (an article).
///
/// Items are never edited in place: to change one, remove it and add the
/// replacement under the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Business key (article number, e.g. "ART001").
    pub id: String,
    /// Purity marking, by convention "<symbol> <fineness>" (e.g. "AU 585").
    /// Only required to be non-empty.
    pub metal_code: String,
    pub weight_grams: f64,
    /// Free-form category label ("Кольцо", "Серьги", ...).
    pub item_type: String,
}

impl CatalogItem {
    pub fn new(
        id: impl Into<String>,
        metal_code: impl Into<String>,
        weight_grams: f64,
        item_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            metal_code: metal_code.into(),
            weight_grams,
            item_type: item_type.into(),
        }
    }

    /// Check every field, reporting all failures at once.
    ///
    /// Identity uniqueness is the repository's concern, not checked here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.field_violations().into_result()
    }

    pub(crate) fn field_violations(&self) -> Violations {
        let mut v = Violations::new();
        v.check(non_empty(&self.id), "id", ViolationKind::Empty)
            .check(non_empty(&self.metal_code), "metal_code", ViolationKind::Empty)
            .check(positive(self.weight_grams), "weight_grams", ViolationKind::NotPositive)
            .check(non_empty(&self.item_type), "item_type", ViolationKind::Empty);
        v
    }
}

impl Entity for CatalogItem {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_item_passes() {
        let item = CatalogItem::new("ART001", "AG 925", 5.2, "Кольцо");
        assert!(item.validate().is_ok());
    }

    #[test]
    fn all_bad_fields_are_reported_together() {
        let item = CatalogItem::new("", " ", 0.0, "");
        let err = item.validate().unwrap_err();
        assert_eq!(err.violations().len(), 4);
        assert!(err.has("id", ViolationKind::Empty));
        assert!(err.has("metal_code", ViolationKind::Empty));
        assert!(err.has("weight_grams", ViolationKind::NotPositive));
        assert!(err.has("item_type", ViolationKind::Empty));
    }

    #[test]
    fn negative_and_nan_weights_fail() {
        for w in [-1.0, f64::NAN] {
            let err = CatalogItem::new("ART900", "AU 750", w, "Серьги")
                .validate()
                .unwrap_err();
            assert_eq!(err.violations().len(), 1);
            assert!(err.has("weight_grams", ViolationKind::NotPositive));
        }
    }

    #[test]
    fn metal_code_is_free_form() {
        assert!(CatalogItem::new("X1", "silver-ish", 1.0, "Кулон").validate().is_ok());
    }

    #[test]
    fn entity_id_is_the_business_key() {
        let item = CatalogItem::new("ART042", "PT 950", 6.0, "Запонки");
        assert_eq!(Entity::id(&item), "ART042");
    }
}
