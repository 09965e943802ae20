// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read queries against the `order_store` table.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::OrderStoreRow;
use crate::diesel_schema::order_store;
use crate::error::StorageError;

/// Loads the stored row for `store_key`, if any.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `store_key` - The record key
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_order_row(
    conn: &mut SqliteConnection,
    store_key: &str,
) -> Result<Option<OrderStoreRow>, StorageError> {
    let row: Option<OrderStoreRow> = order_store::table
        .filter(order_store::store_key.eq(store_key))
        .select(OrderStoreRow::as_select())
        .first(conn)
        .optional()?;
    Ok(row)
}

/// Loads only the stored payload for `store_key`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_order_payload(
    conn: &mut SqliteConnection,
    store_key: &str,
) -> Result<Option<String>, StorageError> {
    Ok(get_order_row(conn, store_key)?.map(|row| row.payload))
}
