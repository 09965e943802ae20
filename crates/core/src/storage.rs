// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Durable key-value storage for the serialized order document.
///
/// Backends hold a single JSON document. The store decides when to load,
/// save, and clear it; backends only move bytes.
pub trait StateStorage {
    /// The backend's error type.
    type Error: std::fmt::Display;

    /// Loads the stored document, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load(&mut self) -> Result<Option<String>, Self::Error>;

    /// Replaces the stored document.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn save(&mut self, payload: &str) -> Result<(), Self::Error>;

    /// Removes the stored document.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn clear(&mut self) -> Result<(), Self::Error>;
}
