// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use galley_order_api::{OrderSubmitter, SubmissionPayload};
use tracing::info;

/// Submitter that records each order in the log instead of sending it on.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSubmitter;

impl OrderSubmitter for LoggingSubmitter {
    fn submit(&self, payload: &SubmissionPayload) -> Result<(), String> {
        let body: String = serde_json::to_string(payload)
            .map_err(|e| format!("Failed to encode submission: {e}"))?;
        info!(
            order_number = %payload.customer.order_number,
            email = %payload.customer.email,
            lines = payload.order.len(),
            payload = %body,
            "Order received"
        );
        Ok(())
    }
}
