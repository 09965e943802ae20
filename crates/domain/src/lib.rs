// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod reconcile;
mod summary;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, is_excluded_sheet};
pub use error::DomainError;
pub use reconcile::{CategoryRowView, reconcile_category, search_rows};
pub use summary::{SummaryDraft, assemble_summary};

// Re-export public types
pub use types::{
    CatalogRow, CustomerDetails, CustomerField, ItemField, ItemUpdate, ItemsByCategory,
    LineItemKey, MAX_COMMENT_CHARS, MAX_QUANTITY, OrderLineItem, OrderNumber,
};
pub use validation::{
    validate_catalog_position, validate_category_name, validate_line_item,
    validate_order_payload, validate_required_customer_fields,
};
