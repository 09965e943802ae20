// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Category name is empty or invalid.
    InvalidCategory(String),
    /// A line item identifier could not be parsed into a category and row index.
    InvalidLineItemId(String),
    /// The referenced category is not part of the loaded catalog.
    CategoryNotFound(String),
    /// The referenced row does not exist within its catalog category.
    CatalogPositionNotFound {
        /// The category that was searched.
        category: String,
        /// The requested row index.
        index: usize,
        /// The number of rows the category actually has.
        row_count: usize,
    },
    /// A line item does not belong to the category list it was filed under.
    CategoryMismatch {
        /// The category the item claims.
        item_category: String,
        /// The category list it was found in.
        list_category: String,
    },
    /// Quantity is outside the permitted range.
    QuantityOutOfRange {
        /// The line item identifier.
        id: String,
        /// The offending quantity.
        quantity: u32,
        /// The largest permitted quantity.
        max: u32,
    },
    /// A comment exceeds the permitted length.
    CommentTooLong {
        /// The line item identifier.
        id: String,
        /// The comment field name.
        field: &'static str,
        /// The comment length in characters.
        length: usize,
        /// The maximum permitted length in characters.
        max: usize,
    },
    /// A required customer field is empty.
    MissingCustomerField {
        /// The field label as shown to the customer.
        label: &'static str,
    },
    /// An order must contain at least one line.
    EmptyOrder,
    /// Unknown customer field name.
    UnknownCustomerField(String),
    /// Unknown line item field name.
    UnknownItemField(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCategory(msg) => write!(f, "Invalid category: {msg}"),
            Self::InvalidLineItemId(id) => write!(f, "Invalid line item id: '{id}'"),
            Self::CategoryNotFound(category) => {
                write!(f, "Category '{category}' not found in catalog")
            }
            Self::CatalogPositionNotFound {
                category,
                index,
                row_count,
            } => {
                write!(
                    f,
                    "Row {index} not found in category '{category}' ({row_count} rows)"
                )
            }
            Self::CategoryMismatch {
                item_category,
                list_category,
            } => {
                write!(
                    f,
                    "Line item for category '{item_category}' filed under '{list_category}'"
                )
            }
            Self::QuantityOutOfRange { id, quantity, max } => {
                write!(
                    f,
                    "Quantity {quantity} for '{id}' is out of range. Must be between 0 and {max}"
                )
            }
            Self::CommentTooLong {
                id,
                field,
                length,
                max,
            } => {
                write!(
                    f,
                    "{field} for '{id}' is {length} characters. Must be at most {max}"
                )
            }
            Self::MissingCustomerField { label } => write!(f, "{label} is required"),
            Self::EmptyOrder => write!(f, "At least one item is required"),
            Self::UnknownCustomerField(name) => write!(f, "Unknown customer field: '{name}'"),
            Self::UnknownItemField(name) => write!(f, "Unknown item field: '{name}'"),
        }
    }
}

impl std::error::Error for DomainError {}
