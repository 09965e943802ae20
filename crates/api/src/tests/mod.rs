// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod handler_tests;

use crate::{OrderSubmitter, SubmissionPayload};
use galley_order::OrderStore;
use galley_order_domain::{Catalog, CatalogRow, CustomerField};
use galley_order_persistence::MemoryStorage;
use std::sync::Mutex;

pub fn create_test_catalog() -> Catalog {
    let mut catalog: Catalog = Catalog::new();
    catalog.insert_category(
        "Produce",
        vec![
            CatalogRow::new("Produce", "P-01", "Avocado", "Each"),
            CatalogRow::new("Produce", "P-02", "Lemons", "1kg bag"),
            CatalogRow::new("Produce", "P-03", "Basil", "Bunch"),
        ],
    );
    catalog.insert_category(
        "Dairy",
        vec![CatalogRow::new("Dairy", "D-01", "Whole Milk", "1L")],
    );
    catalog
}

pub fn create_test_store() -> OrderStore<MemoryStorage> {
    OrderStore::open(MemoryStorage::new())
}

/// Fills the customer fields a submission requires.
pub fn complete_customer(store: &mut OrderStore<MemoryStorage>) {
    store
        .set_customer(CustomerField::Email, String::from("chef@example.com"))
        .unwrap();
    store
        .set_customer(CustomerField::BoatName, String::from("Sea Breeze"))
        .unwrap();
    store
        .set_customer(CustomerField::OrderDate, String::from("2026-03-01"))
        .unwrap();
    store
        .set_customer(CustomerField::DeliverBy, String::from("2026-03-05"))
        .unwrap();
    store
        .set_customer(CustomerField::OrderName, String::from("Charter week 9"))
        .unwrap();
}

/// Records every payload it accepts.
#[derive(Debug, Default)]
pub struct RecordingSubmitter {
    pub received: Mutex<Vec<SubmissionPayload>>,
}

impl OrderSubmitter for RecordingSubmitter {
    fn submit(&self, payload: &SubmissionPayload) -> Result<(), String> {
        self.received.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

/// Rejects every payload.
#[derive(Debug, Default)]
pub struct RejectingSubmitter;

impl OrderSubmitter for RejectingSubmitter {
    fn submit(&self, _payload: &SubmissionPayload) -> Result<(), String> {
        Err(String::from("mail relay unreachable"))
    }
}
