// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod catalog;

use crate::{Catalog, CatalogRow, ItemUpdate, LineItemKey, OrderLineItem};

/// Builds a two-category catalog: three produce rows and one dairy row.
pub fn create_test_catalog() -> Catalog {
    let mut catalog: Catalog = Catalog::new();
    catalog.insert_category(
        "Produce",
        vec![
            CatalogRow::new("Produce", "P-01", "Avocado", "Each"),
            CatalogRow::new("Produce", "P-02", "Lemons", "1kg bag"),
            CatalogRow::new("Produce", "P-03", "Basil", "Bunch"),
        ],
    );
    catalog.insert_category(
        "Dairy",
        vec![CatalogRow::new("Dairy", "D-01", "Whole Milk", "1L")],
    );
    catalog
}

/// Builds a line with a quantity set, as the store would after one edit.
pub fn create_test_line(category: &str, index: usize, quantity: u32) -> OrderLineItem {
    let mut line: OrderLineItem = OrderLineItem::partial(LineItemKey::new(category, index));
    line.apply_update(ItemUpdate::Quantity(quantity));
    line
}
