// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{CatalogRow, LineItemKey};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Sheet-name fragments that never hold catalog rows.
const EXCLUDED_SHEET_FRAGMENTS: &[&str] = &["welcome", "order summary"];

/// Returns whether a spreadsheet sheet is excluded from the catalog.
///
/// Matching is a case-insensitive substring test against the sheet name.
#[must_use]
pub fn is_excluded_sheet(sheet_name: &str) -> bool {
    let lowered: String = sheet_name.to_lowercase();
    EXCLUDED_SHEET_FRAGMENTS
        .iter()
        .any(|fragment| lowered.contains(fragment))
}

/// The read-only product catalog: category name to ordered rows.
///
/// Categories keep the order of the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: IndexMap<String, Vec<CatalogRow>>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a category, keeping its original position on replace.
    pub fn insert_category(&mut self, name: &str, rows: Vec<CatalogRow>) {
        self.categories.insert(name.to_string(), rows);
    }

    /// Returns the category names in catalog order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Returns the rows of a category.
    #[must_use]
    pub fn rows(&self, category: &str) -> Option<&[CatalogRow]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Returns the row at a catalog position.
    #[must_use]
    pub fn row(&self, key: &LineItemKey) -> Option<&CatalogRow> {
        self.rows(key.category())?.get(key.index())
    }

    /// Returns whether the catalog has a category of this name.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Returns the number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns whether the catalog has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
