// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::create_test_catalog;
use crate::{Catalog, CatalogRow, LineItemKey, is_excluded_sheet};

#[test]
fn test_category_names_keep_document_order() {
    let catalog: Catalog = create_test_catalog();
    let names: Vec<&str> = catalog.category_names().collect();
    assert_eq!(names, vec!["Produce", "Dairy"]);
}

#[test]
fn test_row_lookup_by_key() {
    let catalog: Catalog = create_test_catalog();

    let row: &CatalogRow = catalog.row(&LineItemKey::new("Produce", 1)).unwrap();
    assert_eq!(row.description, "Lemons");

    assert!(catalog.row(&LineItemKey::new("Produce", 3)).is_none());
    assert!(catalog.row(&LineItemKey::new("Bakery", 0)).is_none());
}

#[test]
fn test_catalog_deserializes_from_document_in_order() {
    let json: &str = r#"{
        "Zucchini Sheet": [{"category": "Veg", "binCode": "", "description": "Zucchini", "packaging": "kg"}],
        "Apples": [{"category": "Fruit", "binCode": "A1", "description": "Gala", "packaging": "Each"}]
    }"#;
    let catalog: Catalog = serde_json::from_str(json).unwrap();

    let names: Vec<&str> = catalog.category_names().collect();
    assert_eq!(names, vec!["Zucchini Sheet", "Apples"]);
    assert_eq!(catalog.len(), 2);
    assert!(catalog.has_category("Apples"));
}

#[test]
fn test_empty_catalog() {
    let catalog: Catalog = Catalog::new();
    assert!(catalog.is_empty());
    assert_eq!(catalog.category_names().count(), 0);
}

#[test]
fn test_excluded_sheets_are_case_insensitive() {
    assert!(is_excluded_sheet("Welcome"));
    assert!(is_excluded_sheet("WELCOME PAGE"));
    assert!(is_excluded_sheet("Order Summary"));
    assert!(is_excluded_sheet("old order summary (2025)"));
    assert!(!is_excluded_sheet("Produce"));
    assert!(!is_excluded_sheet("Order Forms"));
}
