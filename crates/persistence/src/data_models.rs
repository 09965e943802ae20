// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;

use crate::diesel_schema::order_store;

/// A stored order document row.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = order_store)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderStoreRow {
    pub store_key: String,
    pub payload: String,
    pub updated_at: String,
}

/// Insertable form of [`OrderStoreRow`].
#[derive(Debug, Insertable)]
#[diesel(table_name = order_store)]
pub struct NewOrderStoreRow<'a> {
    pub store_key: &'a str,
    pub payload: &'a str,
    pub updated_at: &'a str,
}
