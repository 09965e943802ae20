// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog_loader;
mod clamp;
mod error;
mod export;
mod handlers;
mod request_response;
mod submission;

#[cfg(test)]
mod tests;

pub use catalog_loader::{
    convert_sheet, convert_sheets, load_catalog_document, load_catalog_file,
    render_catalog_document,
};
pub use clamp::{clamp_comment_input, clamp_item_input, clamp_quantity_input};
pub use error::{ApiError, absorb_persistence_failure, translate_core_error, translate_domain_error};
pub use export::{
    EMAIL_REQUIRED_MESSAGE, EMPTY_ORDER_MESSAGE, ExportDocument, RenderedExport, SUMMARY_HEADER,
    build_export_document, validate_export,
};
pub use handlers::{
    edit_category_row, edit_summary_draft, export_order, get_category_rows, get_order,
    get_summary, list_categories, remove_summary_draft_line, reset_order, set_customer,
    submit_order, update_item,
};
pub use request_response::{
    CategoryListResponse, CategoryRowsResponse, CheckoutRequest, CheckoutResponse,
    DraftEditRequest, DraftRemoveRequest, DraftResponse, EditRowRequest, OrderResponse,
    SetCustomerRequest, SummaryResponse, UpdateItemRequest,
};
pub use submission::{OrderSubmitter, SubmissionPayload};
