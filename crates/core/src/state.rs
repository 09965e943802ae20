// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use galley_order_domain::{CustomerDetails, ItemsByCategory, OrderLineItem, OrderNumber};
use serde::{Deserialize, Serialize};

/// The in-progress order: line items per category plus customer details.
///
/// This is also the persisted document layout:
/// `{ "items": { [category]: OrderLineItem[] }, "customer": CustomerDetails }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderState {
    /// Line items per category, in first-insertion order.
    pub items: ItemsByCategory,
    /// Customer details for this order session.
    pub customer: CustomerDetails,
}

impl OrderState {
    /// Creates an empty order for a new session.
    ///
    /// # Arguments
    ///
    /// * `order_number` - The order number minted for this session
    #[must_use]
    pub fn fresh(order_number: OrderNumber) -> Self {
        Self {
            items: ItemsByCategory::new(),
            customer: CustomerDetails::fresh(order_number),
        }
    }

    /// Returns the lines filed under a category, or an empty slice.
    #[must_use]
    pub fn items_for(&self, category: &str) -> &[OrderLineItem] {
        self.items.get(category).map_or(&[], Vec::as_slice)
    }

    /// Returns the total number of lines across all categories.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    /// Renders a short description of the state for logs.
    #[must_use]
    pub fn to_snapshot(&self) -> String {
        format!(
            "order_number={},categories={},lines={}",
            self.customer.order_number,
            self.items.len(),
            self.line_count()
        )
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: OrderState,
    /// The name of the command that produced this transition.
    pub action: &'static str,
    /// Human-readable details about the change.
    pub details: String,
}
