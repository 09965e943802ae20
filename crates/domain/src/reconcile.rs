// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Merging catalog rows with stored order lines for a category page.

use crate::types::{CatalogRow, LineItemKey, OrderLineItem};
use serde::{Deserialize, Serialize};

/// A catalog row as shown on a category page, merged with any stored line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRowView {
    /// The positional key of the row.
    pub id: LineItemKey,
    /// The row's category heading.
    pub category: String,
    /// The warehouse bin code.
    pub bin_code: String,
    /// The product description.
    pub description: String,
    /// The packaging details.
    pub packaging: String,
    /// The quantity currently ordered.
    pub quantity: u32,
    /// The chef comment currently entered.
    pub chef_comment: String,
    /// The shopper comment currently entered.
    pub shopper_comment: String,
}

/// Prefers the catalog value, falling back to the stored one when the catalog lacks it.
fn prefer_catalog(catalog_value: &str, stored_value: Option<&str>) -> String {
    if catalog_value.is_empty() {
        stored_value.unwrap_or_default().to_string()
    } else {
        catalog_value.to_string()
    }
}

/// Merges a category's catalog rows with the order lines stored for it.
///
/// Each row gets the positional key `{category, index}`. Quantity and
/// comments come from the stored line with the same key, or default to zero
/// and empty. Bin code, description and packaging prefer the catalog.
///
/// This is read-only with respect to the stored lines.
#[must_use]
pub fn reconcile_category(
    category: &str,
    rows: &[CatalogRow],
    stored: &[OrderLineItem],
) -> Vec<CategoryRowView> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let id: LineItemKey = LineItemKey::new(category, index);
            let line: Option<&OrderLineItem> = stored.iter().find(|item| item.id == id);

            CategoryRowView {
                category: if row.category.is_empty() {
                    category.to_string()
                } else {
                    row.category.clone()
                },
                bin_code: prefer_catalog(&row.bin_code, line.and_then(|l| l.bin_code.as_deref())),
                description: prefer_catalog(&row.description, line.map(|l| l.description.as_str())),
                packaging: prefer_catalog(&row.packaging, line.map(|l| l.packaging.as_str())),
                quantity: line.map_or(0, |l| l.quantity),
                chef_comment: line
                    .map(|l| l.chef_comment_or_empty().to_string())
                    .unwrap_or_default(),
                shopper_comment: line
                    .map(|l| l.shopper_comment_or_empty().to_string())
                    .unwrap_or_default(),
                id,
            }
        })
        .collect()
}

/// Filters category rows by a case-insensitive description search.
///
/// An empty query keeps every row.
#[must_use]
pub fn search_rows(rows: Vec<CategoryRowView>, query: &str) -> Vec<CategoryRowView> {
    let needle: String = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows;
    }

    rows.into_iter()
        .filter(|row| row.description.to_lowercase().contains(&needle))
        .collect()
}
