// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::StateStorage;
use galley_order_domain::{Catalog, CatalogRow};
use std::cell::RefCell;
use std::rc::Rc;
use time::OffsetDateTime;
use time::macros::datetime;

/// In-memory storage whose document stays visible to the test after the
/// store takes ownership.
#[derive(Debug, Clone, Default)]
pub struct SharedStorage {
    pub document: Rc<RefCell<Option<String>>>,
    pub saves: Rc<RefCell<usize>>,
}

impl SharedStorage {
    pub fn with_document(payload: &str) -> Self {
        let storage: Self = Self::default();
        *storage.document.borrow_mut() = Some(payload.to_string());
        storage
    }

    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }
}

impl StateStorage for SharedStorage {
    type Error = String;

    fn load(&mut self) -> Result<Option<String>, Self::Error> {
        Ok(self.document.borrow().clone())
    }

    fn save(&mut self, payload: &str) -> Result<(), Self::Error> {
        *self.document.borrow_mut() = Some(payload.to_string());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        *self.document.borrow_mut() = None;
        Ok(())
    }
}

/// Shared storage whose documents can be replaced but never removed.
#[derive(Debug, Clone, Default)]
pub struct UnclearableStorage {
    pub inner: SharedStorage,
}

impl StateStorage for UnclearableStorage {
    type Error = String;

    fn load(&mut self) -> Result<Option<String>, Self::Error> {
        self.inner.load()
    }

    fn save(&mut self, payload: &str) -> Result<(), Self::Error> {
        self.inner.save(payload)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        Err(String::from("delete not permitted"))
    }
}

/// Storage that can be read but rejects every write.
#[derive(Debug, Clone, Default)]
pub struct ReadOnlyStorage;

impl StateStorage for ReadOnlyStorage {
    type Error = String;

    fn load(&mut self) -> Result<Option<String>, Self::Error> {
        Ok(None)
    }

    fn save(&mut self, _payload: &str) -> Result<(), Self::Error> {
        Err(String::from("quota exceeded"))
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        Err(String::from("quota exceeded"))
    }
}

/// Storage that cannot be read at all.
#[derive(Debug, Clone, Default)]
pub struct UnreadableStorage;

impl StateStorage for UnreadableStorage {
    type Error = String;

    fn load(&mut self) -> Result<Option<String>, Self::Error> {
        Err(String::from("storage disabled"))
    }

    fn save(&mut self, _payload: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub const fn fixed_clock() -> OffsetDateTime {
    datetime!(2026-01-04 12:00:00 UTC)
}

pub fn create_test_catalog() -> Catalog {
    let mut catalog: Catalog = Catalog::new();
    catalog.insert_category(
        "Produce",
        vec![
            CatalogRow::new("Produce", "P-01", "Avocado", "Each"),
            CatalogRow::new("Produce", "P-02", "Lemons", "1kg bag"),
        ],
    );
    catalog.insert_category(
        "Dairy",
        vec![CatalogRow::new("Dairy", "D-01", "Whole Milk", "1L")],
    );
    catalog
}
