// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::command::Command;
use crate::error::StoreError;
use crate::state::{OrderState, TransitionResult};
use crate::storage::StateStorage;
use galley_order_domain::{
    Catalog, CustomerDetails, CustomerField, ItemUpdate, ItemsByCategory, LineItemKey,
    OrderLineItem, OrderNumber,
};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

/// Source of the current time, used when minting order numbers.
pub type Clock = fn() -> OffsetDateTime;

/// The single authoritative order for a session.
///
/// Every successful mutation replaces the in-memory state and then writes
/// the whole document through to storage. A failed write is reported but
/// never rolls back the in-memory state.
pub struct OrderStore<S: StateStorage> {
    storage: S,
    clock: Clock,
    state: OrderState,
}

impl<S: StateStorage> OrderStore<S> {
    /// Opens a store, rehydrating from storage.
    ///
    /// # Arguments
    ///
    /// * `storage` - The durable storage backend
    #[must_use]
    pub fn open(storage: S) -> Self {
        Self::open_with_clock(storage, OffsetDateTime::now_utc)
    }

    /// Opens a store with an explicit clock.
    ///
    /// Missing, unreadable, or malformed stored documents all fall back to a
    /// fresh order with a newly minted order number.
    ///
    /// # Arguments
    ///
    /// * `storage` - The durable storage backend
    /// * `clock` - The time source for order numbers
    #[must_use]
    pub fn open_with_clock(mut storage: S, clock: Clock) -> Self {
        let state: OrderState = match storage.load() {
            Ok(Some(payload)) => match serde_json::from_str::<OrderState>(&payload) {
                Ok(state) => {
                    info!(snapshot = %state.to_snapshot(), "Rehydrated order state");
                    state
                }
                Err(e) => {
                    warn!(error = %e, "Stored order state is malformed, starting fresh");
                    OrderState::fresh(OrderNumber::mint(clock(), None))
                }
            },
            Ok(None) => {
                debug!("No stored order state, starting fresh");
                OrderState::fresh(OrderNumber::mint(clock(), None))
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored order state, starting fresh");
                OrderState::fresh(OrderNumber::mint(clock(), None))
            }
        };

        Self {
            storage,
            clock,
            state,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &OrderState {
        &self.state
    }

    /// Returns all line items by category.
    #[must_use]
    pub const fn items(&self) -> &ItemsByCategory {
        &self.state.items
    }

    /// Returns the lines stored for one category.
    #[must_use]
    pub fn items_for(&self, category: &str) -> &[OrderLineItem] {
        self.state.items_for(category)
    }

    /// Returns the customer details.
    #[must_use]
    pub const fn customer(&self) -> &CustomerDetails {
        &self.state.customer
    }

    /// Returns the current session's order number.
    #[must_use]
    pub const fn order_number(&self) -> &OrderNumber {
        &self.state.customer.order_number
    }

    /// Returns the storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store and returns its storage backend.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Patches one field of a line item, inserting a partial line if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` if the key does not name a catalog row or the
    /// patched line breaks a limit, and `StoreError::Persistence` if the
    /// write-through failed.
    pub fn update_item(
        &mut self,
        catalog: &Catalog,
        key: LineItemKey,
        update: ItemUpdate,
    ) -> Result<&OrderState, StoreError> {
        self.execute(catalog, Command::UpdateItem { key, update })
    }

    /// Copies bin code, description and packaging from the catalog into a line.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` if the key does not name a catalog row and
    /// `StoreError::Persistence` if the write-through failed.
    pub fn sync_catalog_details(
        &mut self,
        catalog: &Catalog,
        key: LineItemKey,
    ) -> Result<&OrderState, StoreError> {
        self.execute(catalog, Command::SyncCatalogDetails { key })
    }

    /// Replaces one customer field.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the write-through failed.
    pub fn set_customer(
        &mut self,
        field: CustomerField,
        value: String,
    ) -> Result<&OrderState, StoreError> {
        self.execute(&Catalog::new(), Command::SetCustomer { field, value })
    }

    /// Discards the order, clears storage, and starts a new session.
    ///
    /// The new order number is always different from the previous one.
    /// Storage is left empty, so a later rehydration mints its own number.
    /// If storage cannot be cleared, the fresh state is written over the old
    /// document instead so the closed order is never rehydrated.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if storage could neither be cleared
    /// nor overwritten.
    pub fn reset(&mut self) -> Result<&OrderState, StoreError> {
        let order_number: OrderNumber =
            OrderNumber::mint((self.clock)(), Some(self.order_number()));
        let result: TransitionResult =
            apply(&Catalog::new(), &self.state, Command::Reset { order_number })?;
        info!(action = result.action, details = %result.details, "Order reset");
        self.state = result.new_state;

        if let Err(e) = self.storage.clear() {
            warn!(error = %e, "Failed to clear stored order state, overwriting it");
            self.persist()?;
        }
        Ok(&self.state)
    }

    /// Applies a command and writes the new state through to storage.
    ///
    /// `Reset` is routed to [`OrderStore::reset`] so storage is cleared
    /// rather than overwritten.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` if the command is rejected and
    /// `StoreError::Persistence` if the write-through failed.
    pub fn execute(
        &mut self,
        catalog: &Catalog,
        command: Command,
    ) -> Result<&OrderState, StoreError> {
        if matches!(command, Command::Reset { .. }) {
            return self.reset();
        }

        let result: TransitionResult = apply(catalog, &self.state, command)
            .inspect_err(|e| debug!(error = %e, "Command rejected"))?;
        debug!(action = result.action, details = %result.details, "Command applied");
        self.state = result.new_state;
        self.persist()?;
        Ok(&self.state)
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let payload: String = serde_json::to_string(&self.state)
            .map_err(|e| StoreError::Persistence(e.to_string()))?;
        self.storage.save(&payload).map_err(|e| {
            warn!(error = %e, "Failed to persist order state");
            StoreError::Persistence(e.to_string())
        })
    }
}
