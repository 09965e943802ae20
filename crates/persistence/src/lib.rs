// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Galley Order.
//!
//! The order store keeps a single JSON document under the fixed key
//! [`STORE_KEY`]. This crate provides the durable places that document can
//! live, all behind the [`StateStorage`] trait:
//!
//! - **`SQLite`** (default) - one row in the `order_store` table, managed by
//!   Diesel with embedded migrations
//! - **JSON file** - the document on disk, replaced atomically on every write
//! - **Memory** - process-local, used by tests and throwaway sessions
//!
//! ## Testing Philosophy
//!
//! - Standard tests run against in-memory `SQLite` and temporary directories
//! - No test depends on external infrastructure

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use backend::file::JsonFileStorage;
pub use backend::memory::MemoryStorage;
pub use data_models::OrderStoreRow;
pub use error::StorageError;
pub use galley_order::StateStorage;

/// The fixed key the order document is stored under.
pub const STORE_KEY: &str = "order-store";

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Internal enum for backend-specific storage handles.
#[allow(clippy::large_enum_variant)]
pub enum BackendConnection {
    Sqlite(SqliteConnection),
    File(JsonFileStorage),
    Memory(MemoryStorage),
}

/// Persistence adapter for the order document.
///
/// Backend selection happens once at construction time and is transparent to
/// callers.
pub struct Persistence {
    pub(crate) conn: BackendConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared-cache database so tests stay isolated.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, StorageError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_order_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self {
            conn: BackendConnection::Sqlite(conn),
        })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            StorageError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self {
            conn: BackendConnection::Sqlite(conn),
        })
    }

    /// Creates a persistence adapter that stores the document as a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path of the JSON document
    #[must_use]
    pub fn new_json_file<P: AsRef<Path>>(path: P) -> Self {
        Self {
            conn: BackendConnection::File(JsonFileStorage::new(path)),
        }
    }

    /// Creates a persistence adapter that keeps the document in process memory.
    #[must_use]
    pub fn new_volatile() -> Self {
        Self {
            conn: BackendConnection::Memory(MemoryStorage::new()),
        }
    }

    /// Returns the backend name for logs.
    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        match &self.conn {
            BackendConnection::Sqlite(_) => "sqlite",
            BackendConnection::File(_) => "file",
            BackendConnection::Memory(_) => "memory",
        }
    }

    /// Returns the full stored row, including its write timestamp.
    ///
    /// Only the `SQLite` backend records timestamps; other backends return `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_order_row(&mut self) -> Result<Option<OrderStoreRow>, StorageError> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => queries::get_order_row(conn, STORE_KEY),
            BackendConnection::File(_) | BackendConnection::Memory(_) => Ok(None),
        }
    }
}

impl StateStorage for Persistence {
    type Error = StorageError;

    fn load(&mut self) -> Result<Option<String>, Self::Error> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => queries::get_order_payload(conn, STORE_KEY),
            BackendConnection::File(storage) => storage.load(),
            BackendConnection::Memory(storage) => storage.load(),
        }
    }

    fn save(&mut self, payload: &str) -> Result<(), Self::Error> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => {
                mutations::upsert_order_payload(conn, STORE_KEY, payload)
            }
            BackendConnection::File(storage) => storage.save(payload),
            BackendConnection::Memory(storage) => storage.save(payload),
        }
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => {
                mutations::delete_order_payload(conn, STORE_KEY).map(|_| ())
            }
            BackendConnection::File(storage) => storage.clear(),
            BackendConnection::Memory(storage) => storage.clear(),
        }
    }
}
