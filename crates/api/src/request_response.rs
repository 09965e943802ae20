// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use galley_order_domain::{
    CategoryRowView, CustomerDetails, CustomerField, ItemField, ItemsByCategory, LineItemKey,
    OrderLineItem,
};
use serde::{Deserialize, Serialize};

/// API response listing the browsable categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryListResponse {
    /// Category names in catalog order.
    pub categories: Vec<String>,
}

/// API response for one category page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRowsResponse {
    /// The category name.
    pub category: String,
    /// The catalog rows merged with what has been ordered.
    pub rows: Vec<CategoryRowView>,
}

/// API request to edit one cell of a category page row.
///
/// The value is the raw form input and is clamped before it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRowRequest {
    /// The edited field.
    pub field: ItemField,
    /// The raw input.
    pub value: String,
}

/// API request to update a line item directly.
///
/// Unlike [`EditRowRequest`] the value is not clamped; out-of-range values
/// are rejected by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    /// The catalog category.
    pub category: String,
    /// The row position within the category.
    pub index: usize,
    /// The field to patch.
    pub field: ItemField,
    /// The new value.
    pub value: String,
}

/// API request to set one customer field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetCustomerRequest {
    /// The customer field.
    pub field: CustomerField,
    /// The new value.
    pub value: String,
}

/// API response carrying the whole order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Line items per category.
    pub items: ItemsByCategory,
    /// Customer details.
    pub customer: CustomerDetails,
}

/// API response carrying the order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    /// The session's order number.
    pub order_number: String,
    /// Lines with a positive quantity, in category order.
    pub lines: Vec<OrderLineItem>,
}

/// API request to edit one line of a summary draft.
///
/// The draft travels with the request and is never stored. The value is
/// clamped like a category page edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftEditRequest {
    /// The current draft lines.
    pub lines: Vec<OrderLineItem>,
    /// The line to edit.
    pub id: LineItemKey,
    /// The edited field.
    pub field: ItemField,
    /// The raw input.
    pub value: String,
}

/// API request to drop one line from a summary draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRemoveRequest {
    /// The current draft lines.
    pub lines: Vec<OrderLineItem>,
    /// The line to drop.
    pub id: LineItemKey,
}

/// API response carrying an updated summary draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftResponse {
    /// The draft lines after the change.
    pub lines: Vec<OrderLineItem>,
}

/// API request to export or submit the order.
///
/// `lines` is the summary draft. When absent the store's own summary is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// The summary draft lines.
    #[serde(default)]
    pub lines: Option<Vec<OrderLineItem>>,
}

/// API response after a successful submission or reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    /// The order number that was just closed, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_order_number: Option<String>,
    /// The order number of the new session.
    pub order_number: String,
    /// A success message.
    pub message: String,
}
