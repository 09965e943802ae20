// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{OrderState, TransitionResult};
use galley_order_domain::{
    Catalog, CatalogRow, LineItemKey, OrderLineItem, validate_catalog_position,
    validate_category_name, validate_line_item,
};

/// Applies a command to the current state, producing a new state.
///
/// This is a pure function: the input state is never mutated.
///
/// # Arguments
///
/// * `catalog` - The product catalog line items must refer to
/// * `state` - The current order state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The line item key does not name an existing catalog row
/// - The patched line item violates quantity or comment limits
pub fn apply(
    catalog: &Catalog,
    state: &OrderState,
    command: Command,
) -> Result<TransitionResult, CoreError> {
    let action: &'static str = command.name();

    match command {
        Command::UpdateItem { key, update } => {
            validate_category_name(key.category())?;
            validate_catalog_position(catalog, &key)?;

            let field: &'static str = update.field().as_str();
            let mut new_state: OrderState = state.clone();
            let line: &mut OrderLineItem = line_mut_or_insert(&mut new_state, key.clone());
            line.apply_update(update);
            validate_line_item(line)?;

            Ok(TransitionResult {
                new_state,
                action,
                details: format!("Updated {field} of {key}"),
            })
        }
        Command::SyncCatalogDetails { key } => {
            let row: &CatalogRow = validate_catalog_position(catalog, &key)?;

            let mut new_state: OrderState = state.clone();
            line_mut_or_insert(&mut new_state, key.clone()).sync_from_catalog(row);

            Ok(TransitionResult {
                new_state,
                action,
                details: format!("Synced catalog details into {key}"),
            })
        }
        Command::SetCustomer { field, value } => {
            let mut new_state: OrderState = state.clone();
            new_state.customer.set(field, value);

            Ok(TransitionResult {
                new_state,
                action,
                details: format!("Set customer {}", field.as_str()),
            })
        }
        Command::Reset { order_number } => {
            let details: String = format!(
                "Replaced order {} with {order_number}",
                state.customer.order_number
            );

            Ok(TransitionResult {
                new_state: OrderState::fresh(order_number),
                action,
                details,
            })
        }
    }
}

/// Finds the line for `key`, appending a partial line to its category when absent.
///
/// The category list is created on first use, which fixes its position in
/// the category order.
fn line_mut_or_insert(state: &mut OrderState, key: LineItemKey) -> &mut OrderLineItem {
    let lines: &mut Vec<OrderLineItem> = state
        .items
        .entry(key.category().to_string())
        .or_default();

    let position: usize = match lines.iter().position(|line| line.id == key) {
        Some(position) => position,
        None => {
            lines.push(OrderLineItem::partial(key));
            lines.len() - 1
        }
    };

    &mut lines[position]
}
