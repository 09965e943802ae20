// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use galley_order_domain::{Catalog, CatalogRow};

pub fn create_test_catalog() -> Catalog {
    let mut catalog: Catalog = Catalog::new();
    catalog.insert_category(
        "Produce",
        vec![
            CatalogRow::new("Produce", "P-01", "Avocado", "Each"),
            CatalogRow::new("Produce", "P-02", "Lemons", "1kg bag"),
        ],
    );
    catalog.insert_category(
        "Dry-Goods",
        vec![CatalogRow::new("Dry-Goods", "DG-07", "Basmati Rice", "5kg")],
    );
    catalog
}
