// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Writes against the `order_store` table.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

use crate::data_models::NewOrderStoreRow;
use crate::diesel_schema::order_store;
use crate::error::StorageError;

/// Inserts or replaces the payload stored under `store_key`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `store_key` - The record key
/// * `payload` - The serialized order document
///
/// # Errors
///
/// Returns an error if the timestamp cannot be rendered or the write fails.
pub fn upsert_order_payload(
    conn: &mut SqliteConnection,
    store_key: &str,
    payload: &str,
) -> Result<(), StorageError> {
    let updated_at: String = OffsetDateTime::now_utc().format(&Rfc3339)?;

    let row: NewOrderStoreRow<'_> = NewOrderStoreRow {
        store_key,
        payload,
        updated_at: &updated_at,
    };

    diesel::insert_into(order_store::table)
        .values(&row)
        .on_conflict(order_store::store_key)
        .do_update()
        .set((
            order_store::payload.eq(payload),
            order_store::updated_at.eq(&updated_at),
        ))
        .execute(conn)?;

    debug!(store_key, bytes = payload.len(), "Upserted order document");
    Ok(())
}

/// Deletes the record stored under `store_key`.
///
/// Deleting a missing record is not an error.
///
/// # Returns
///
/// The number of rows removed.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_order_payload(
    conn: &mut SqliteConnection,
    store_key: &str,
) -> Result<usize, StorageError> {
    let removed: usize =
        diesel::delete(order_store::table.filter(order_store::store_key.eq(store_key)))
            .execute(conn)?;

    debug!(store_key, removed, "Deleted order document");
    Ok(removed)
}
