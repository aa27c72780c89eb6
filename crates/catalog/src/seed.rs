//! Reference catalog the console starts with.

use crate::item::CatalogItem;

const SEED: [(&str, &str, f64, &str); 20] = [
    ("ART001", "AG 925", 5.2, "Кольцо"),
    ("ART002", "AU 585", 3.8, "Цепочка"),
    ("ART003", "AG 925", 4.1, "Браслет"),
    ("ART004", "AU 750", 7.5, "Серьги"),
    ("ART005", "AG 999", 2.3, "Подвеска"),
    ("ART006", "PT 950", 6.7, "Перстень"),
    ("ART007", "AU 585", 5.0, "Крестик"),
    ("ART008", "AG 925", 3.2, "Пусеты"),
    ("ART009", "AU 750", 4.9, "Часы"),
    ("ART010", "PT 950", 7.1, "Запонки"),
    ("ART011", "AG 999", 2.8, "Медальон"),
    ("ART012", "AU 585", 6.2, "Обручальное кольцо"),
    ("ART013", "AG 925", 3.5, "Кулон"),
    ("ART014", "PT 950", 5.8, "Цепочка"),
    ("ART015", "AU 750", 4.4, "Серьги"),
    ("ART016", "AG 925", 7.0, "Подвеска"),
    ("ART017", "AU 585", 5.7, "Перстень"),
    ("ART018", "PT 950", 6.9, "Кольцо"),
    ("ART019", "AG 999", 3.0, "Браслет"),
    ("ART020", "AU 750", 5.3, "Обручальное кольцо"),
];

/// The twenty starter articles, ART001 through ART020.
pub fn catalog() -> Vec<CatalogItem> {
    SEED.iter()
        .map(|&(id, metal, weight, kind)| CatalogItem::new(id, metal, weight, kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogRepository;

    #[test]
    fn seed_satisfies_repository_invariants() {
        let repo = CatalogRepository::with_items(catalog()).unwrap();
        assert_eq!(repo.len(), 20);
        assert_eq!(repo.list().first().map(|i| i.id.as_str()), Some("ART001"));
        assert_eq!(repo.list().last().map(|i| i.id.as_str()), Some("ART020"));
    }
}
