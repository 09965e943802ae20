// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database connection failed.
    #[error("Database connection failed: {0}")]
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),
    /// A raw statement such as a PRAGMA failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),
    /// A diesel query or mutation failed.
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A file backend could not read or write its document.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The storage location is unusable.
    #[error("Initialization error: {0}")]
    InitializationError(String),
    /// The write timestamp could not be rendered.
    #[error("Timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

impl From<diesel::ConnectionError> for StorageError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}
