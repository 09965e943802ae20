// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use galley_order_domain::{CustomerField, ItemUpdate, LineItemKey, OrderNumber};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Patch one field of a line item, inserting a partial line if none exists.
    UpdateItem {
        /// The catalog position of the line.
        key: LineItemKey,
        /// The field and its new value.
        update: ItemUpdate,
    },
    /// Copy bin code, description and packaging from the catalog into a line.
    SyncCatalogDetails {
        /// The catalog position of the line.
        key: LineItemKey,
    },
    /// Patch one field of the customer details.
    SetCustomer {
        /// The field to replace.
        field: CustomerField,
        /// The new value.
        value: String,
    },
    /// Discard the order and start a new session.
    Reset {
        /// The order number of the new session.
        order_number: OrderNumber,
    },
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UpdateItem { .. } => "UpdateItem",
            Self::SyncCatalogDetails { .. } => "SyncCatalogDetails",
            Self::SetCustomer { .. } => "SetCustomer",
            Self::Reset { .. } => "Reset",
        }
    }
}
