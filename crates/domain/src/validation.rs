// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::Catalog;
use crate::error::DomainError;
use crate::types::{
    CatalogRow, CustomerDetails, CustomerField, LineItemKey, MAX_COMMENT_CHARS, MAX_QUANTITY,
    OrderLineItem,
};

/// Customer fields that must be filled in before an order is submitted.
const REQUIRED_CUSTOMER_FIELDS: [CustomerField; 4] = [
    CustomerField::BoatName,
    CustomerField::OrderDate,
    CustomerField::DeliverBy,
    CustomerField::OrderName,
];

/// Validates that a category name is usable as a line item category.
///
/// # Errors
///
/// Returns an error if the category is empty or only whitespace.
pub fn validate_category_name(category: &str) -> Result<(), DomainError> {
    if category.trim().is_empty() {
        return Err(DomainError::InvalidCategory(String::from(
            "Category cannot be empty",
        )));
    }
    Ok(())
}

/// Validates that a catalog position exists and returns its row.
///
/// This is a read-only check; it does not touch order state.
///
/// # Arguments
///
/// * `catalog` - The loaded catalog
/// * `key` - The position to look up
///
/// # Errors
///
/// Returns an error if:
/// - The category is not part of the catalog
/// - The row index is past the end of the category
pub fn validate_catalog_position<'a>(
    catalog: &'a Catalog,
    key: &LineItemKey,
) -> Result<&'a CatalogRow, DomainError> {
    let rows: &[CatalogRow] = catalog
        .rows(key.category())
        .ok_or_else(|| DomainError::CategoryNotFound(key.category().to_string()))?;

    rows.get(key.index())
        .ok_or_else(|| DomainError::CatalogPositionNotFound {
            category: key.category().to_string(),
            index: key.index(),
            row_count: rows.len(),
        })
}

/// Validates the field constraints of a single order line.
///
/// # Errors
///
/// Returns an error if:
/// - The line's category differs from the category in its id
/// - The quantity exceeds `MAX_QUANTITY`
/// - Either comment is longer than `MAX_COMMENT_CHARS` characters
pub fn validate_line_item(item: &OrderLineItem) -> Result<(), DomainError> {
    if item.category != item.id.category() {
        return Err(DomainError::CategoryMismatch {
            item_category: item.category.clone(),
            list_category: item.id.category().to_string(),
        });
    }

    if item.quantity > MAX_QUANTITY {
        return Err(DomainError::QuantityOutOfRange {
            id: item.id.to_string(),
            quantity: item.quantity,
            max: MAX_QUANTITY,
        });
    }

    let comments: [(&'static str, &str); 2] = [
        ("Chef comment", item.chef_comment_or_empty()),
        ("Shopper comment", item.shopper_comment_or_empty()),
    ];
    for (field, comment) in comments {
        let length: usize = comment.chars().count();
        if length > MAX_COMMENT_CHARS {
            return Err(DomainError::CommentTooLong {
                id: item.id.to_string(),
                field,
                length,
                max: MAX_COMMENT_CHARS,
            });
        }
    }

    Ok(())
}

/// Validates that the customer details required for submission are present.
///
/// # Errors
///
/// Returns `DomainError::MissingCustomerField` for the first required field
/// (boat name, order date, deliver by, order name) that is blank.
pub fn validate_required_customer_fields(customer: &CustomerDetails) -> Result<(), DomainError> {
    for field in REQUIRED_CUSTOMER_FIELDS {
        if customer.get(field).trim().is_empty() {
            return Err(DomainError::MissingCustomerField {
                label: field.label(),
            });
        }
    }
    Ok(())
}

/// Validates a complete order payload before it leaves the system.
///
/// # Errors
///
/// Returns an error if:
/// - A required customer field is blank
/// - There are no lines
/// - Any line violates its field constraints
pub fn validate_order_payload(
    customer: &CustomerDetails,
    lines: &[OrderLineItem],
) -> Result<(), DomainError> {
    validate_required_customer_fields(customer)?;

    if lines.is_empty() {
        return Err(DomainError::EmptyOrder);
    }

    lines.iter().try_for_each(validate_line_item)
}
