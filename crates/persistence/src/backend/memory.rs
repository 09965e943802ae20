// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use galley_order::StateStorage;

use crate::error::StorageError;

/// Keeps the order document in memory for the life of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    document: Option<String>,
}

impl MemoryStorage {
    /// Creates an empty memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a memory backend that already holds a document.
    #[must_use]
    pub fn with_document(payload: &str) -> Self {
        Self {
            document: Some(payload.to_string()),
        }
    }

    /// Returns the held document.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl StateStorage for MemoryStorage {
    type Error = StorageError;

    fn load(&mut self) -> Result<Option<String>, Self::Error> {
        Ok(self.document.clone())
    }

    fn save(&mut self, payload: &str) -> Result<(), Self::Error> {
        self.document = Some(payload.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.document = None;
        Ok(())
    }
}
