//! The read-only item catalog.
//!
//! Loaded once at startup and never mutated; the session only filters and
//! reads it. Catalog order is the display order for search results.

use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::money::Money;

/// A purchasable item from the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub description: String,
    pub price: Money,
    /// Optional follow-up hint shown after this item is added.
    #[serde(default)]
    pub suggestion: Option<String>,
}

/// An ordered, read-only set of catalog items.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Create a catalog from an already-ordered item list.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose description starts with `term`, case-insensitively,
    /// in catalog order. The empty term matches nothing, not everything.
    ///
    /// `term` is expected to be already trimmed and lowercased; the session
    /// normalizes it on `Search`.
    pub fn filter_prefix(&self, term: &str) -> Vec<&CatalogItem> {
        if term.is_empty() {
            return Vec::new();
        }
        self.items
            .iter()
            .filter(|item| item.description.to_lowercase().starts_with(term))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fruit_catalog() -> Catalog {
        Catalog::new(vec![
            CatalogItem {
                id: 1,
                description: "Apple".into(),
                price: Money::from_rupees(40),
                suggestion: Some("Peanut butter goes well with apples.".into()),
            },
            CatalogItem {
                id: 2,
                description: "Banana".into(),
                price: Money::from_rupees(10),
                suggestion: None,
            },
            CatalogItem {
                id: 3,
                description: "Apricot".into(),
                price: Money::from_rupees(60),
                suggestion: None,
            },
        ])
    }

    #[test]
    fn filter_prefix_matches_case_insensitively_in_order() {
        let catalog = fruit_catalog();
        let results = catalog.filter_prefix("ap");
        let names: Vec<&str> = results.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Apricot"]);
    }

    #[test]
    fn filter_prefix_empty_term_matches_nothing() {
        let catalog = fruit_catalog();
        assert!(catalog.filter_prefix("").is_empty());
    }

    #[test]
    fn filter_prefix_is_prefix_not_substring() {
        let catalog = fruit_catalog();
        // "pp" occurs inside "Apple" but is not a prefix
        assert!(catalog.filter_prefix("pp").is_empty());
    }

    #[test]
    fn filter_prefix_no_match_is_empty() {
        let catalog = fruit_catalog();
        assert!(catalog.filter_prefix("zucchini").is_empty());
    }

    #[test]
    fn from_json_str_parses_items() {
        let catalog = Catalog::from_json_str(
            r#"{"items": [
                {"id": 1, "description": "Milk", "price": 25.5},
                {"id": 2, "description": "Bread", "price": 30, "suggestion": "Butter?"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].price, Money::from_paise(2550));
        assert_eq!(catalog.items()[1].suggestion.as_deref(), Some("Butter?"));
    }

    #[test]
    fn from_json_str_missing_suggestion_defaults_to_none() {
        let catalog = Catalog::from_json_str(
            r#"{"items": [{"id": 1, "description": "Milk", "price": 25}]}"#,
        )
        .unwrap();
        assert!(catalog.items()[0].suggestion.is_none());
    }

    #[test]
    fn from_json_str_rejects_bad_json() {
        assert!(matches!(
            Catalog::from_json_str("not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn from_json_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"items": [{{"id": 7, "description": "Eggs", "price": 6}}]}}"#
        )
        .unwrap();

        let catalog = Catalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].description, "Eggs");
    }

    #[test]
    fn from_json_file_missing_file_is_io_error() {
        assert!(matches!(
            Catalog::from_json_file("/nonexistent/items.json"),
            Err(CatalogError::Io(_))
        ));
    }

    #[test]
    fn empty_catalog_reports_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
