// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use galley_order_domain::{CustomerDetails, OrderLineItem};
use serde::{Deserialize, Serialize};

/// The order handed to the submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    /// The summary lines being ordered.
    pub order: Vec<OrderLineItem>,
    /// Who is ordering.
    pub customer: CustomerDetails,
}

/// Delivers a completed order, for example by email.
pub trait OrderSubmitter: Send + Sync {
    /// Submits the order.
    ///
    /// # Errors
    ///
    /// Returns a description of the failure if the order was not accepted.
    fn submit(&self, payload: &SubmissionPayload) -> Result<(), String>;
}
