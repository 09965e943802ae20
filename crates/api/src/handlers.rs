// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers shared by every transport.
//!
//! Handlers translate DTOs into store commands and translate errors into
//! `ApiError`. They hold no state of their own.

use galley_order::{OrderStore, StateStorage};
use galley_order_domain::{
    Catalog, CatalogRow, CategoryRowView, ItemField, ItemUpdate, LineItemKey, OrderLineItem,
    SummaryDraft, assemble_summary, reconcile_category, search_rows, validate_order_payload,
};
use tracing::{info, warn};

use crate::clamp::clamp_item_input;
use crate::error::{ApiError, absorb_persistence_failure, translate_domain_error};
use crate::export::{ExportDocument, RenderedExport, build_export_document, validate_export};
use crate::request_response::{
    CategoryListResponse, CategoryRowsResponse, CheckoutRequest, CheckoutResponse,
    DraftEditRequest, DraftRemoveRequest, DraftResponse, EditRowRequest, OrderResponse,
    SetCustomerRequest, SummaryResponse, UpdateItemRequest,
};
use crate::submission::{OrderSubmitter, SubmissionPayload};

/// Lists the catalog's categories in catalog order.
#[must_use]
pub fn list_categories(catalog: &Catalog) -> CategoryListResponse {
    CategoryListResponse {
        categories: catalog.category_names().map(str::to_string).collect(),
    }
}

fn category_rows<'a>(catalog: &'a Catalog, category: &str) -> Result<&'a [CatalogRow], ApiError> {
    catalog
        .rows(category)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Category"),
            message: format!("Category '{category}' does not exist"),
        })
}

/// Returns a category page: catalog rows merged with the ordered quantities.
///
/// # Arguments
///
/// * `catalog` - The product catalog
/// * `store` - The order store
/// * `category` - The category to show
/// * `search` - An optional description filter
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the category does not exist.
pub fn get_category_rows<S: StateStorage>(
    catalog: &Catalog,
    store: &OrderStore<S>,
    category: &str,
    search: Option<&str>,
) -> Result<CategoryRowsResponse, ApiError> {
    let rows: &[CatalogRow] = category_rows(catalog, category)?;
    let views: Vec<CategoryRowView> =
        reconcile_category(category, rows, store.items_for(category));

    Ok(CategoryRowsResponse {
        category: category.to_string(),
        rows: search_rows(views, search.unwrap_or_default()),
    })
}

/// Applies a category page edit.
///
/// The raw input is clamped, the named field is updated, and the row's
/// catalog details are copied into the stored line.
///
/// # Returns
///
/// The reconciled view of the edited row.
///
/// # Errors
///
/// Returns an error if the category or row does not exist.
pub fn edit_category_row<S: StateStorage>(
    catalog: &Catalog,
    store: &mut OrderStore<S>,
    category: &str,
    index: usize,
    request: &EditRowRequest,
) -> Result<CategoryRowView, ApiError> {
    let rows: &[CatalogRow] = category_rows(catalog, category)?;
    let key: LineItemKey = LineItemKey::new(category, index);
    let update: ItemUpdate = clamp_item_input(request.field, &request.value);

    absorb_persistence_failure(store.update_item(catalog, key.clone(), update))?;
    absorb_persistence_failure(store.sync_catalog_details(catalog, key.clone()))?;

    reconcile_category(category, rows, store.items_for(category))
        .into_iter()
        .find(|view| view.id == key)
        .ok_or_else(|| ApiError::Internal {
            message: format!("Edited row {key} missing from category view"),
        })
}

fn parse_item_update(field: ItemField, value: &str) -> Result<ItemUpdate, ApiError> {
    match field {
        ItemField::Quantity => value
            .trim()
            .parse::<u32>()
            .map(ItemUpdate::Quantity)
            .map_err(|e| ApiError::InvalidInput {
                field: String::from("quantity"),
                message: format!("'{value}' is not a whole number: {e}"),
            }),
        ItemField::ChefComment => Ok(ItemUpdate::ChefComment(value.to_string())),
        ItemField::ShopperComment => Ok(ItemUpdate::ShopperComment(value.to_string())),
    }
}

/// Updates one field of a line item without clamping.
///
/// # Errors
///
/// Returns an error if the value does not parse, the catalog position does
/// not exist, or the value breaks a field limit.
pub fn update_item<S: StateStorage>(
    catalog: &Catalog,
    store: &mut OrderStore<S>,
    request: &UpdateItemRequest,
) -> Result<OrderResponse, ApiError> {
    let update: ItemUpdate = parse_item_update(request.field, &request.value)?;
    let key: LineItemKey = LineItemKey::new(&request.category, request.index);

    absorb_persistence_failure(store.update_item(catalog, key, update))?;
    Ok(get_order(store))
}

/// Sets one customer field.
///
/// # Errors
///
/// Does not currently fail; persistence failures are logged.
pub fn set_customer<S: StateStorage>(
    store: &mut OrderStore<S>,
    request: SetCustomerRequest,
) -> Result<OrderResponse, ApiError> {
    absorb_persistence_failure(store.set_customer(request.field, request.value))?;
    Ok(get_order(store))
}

/// Returns the whole order.
#[must_use]
pub fn get_order<S: StateStorage>(store: &OrderStore<S>) -> OrderResponse {
    OrderResponse {
        items: store.items().clone(),
        customer: store.customer().clone(),
    }
}

/// Returns the order summary: lines with a positive quantity.
#[must_use]
pub fn get_summary<S: StateStorage>(store: &OrderStore<S>) -> SummaryResponse {
    SummaryResponse {
        order_number: store.order_number().to_string(),
        lines: assemble_summary(store.items()),
    }
}

fn draft_line_not_found(key: &LineItemKey) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Draft line"),
        message: format!("Line {key} is not in the summary draft"),
    }
}

/// Edits one line of a caller-held summary draft.
///
/// The input is clamped as on a category page. The store is not touched.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the draft has no such line.
pub fn edit_summary_draft(request: DraftEditRequest) -> Result<DraftResponse, ApiError> {
    let mut draft: SummaryDraft = SummaryDraft::from_lines(request.lines);
    let update: ItemUpdate = clamp_item_input(request.field, &request.value);

    if !draft.edit(&request.id, update) {
        return Err(draft_line_not_found(&request.id));
    }
    Ok(DraftResponse {
        lines: draft.into_lines(),
    })
}

/// Drops one line from a caller-held summary draft.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the draft has no such line.
pub fn remove_summary_draft_line(request: DraftRemoveRequest) -> Result<DraftResponse, ApiError> {
    let mut draft: SummaryDraft = SummaryDraft::from_lines(request.lines);

    if !draft.remove(&request.id) {
        return Err(draft_line_not_found(&request.id));
    }
    Ok(DraftResponse {
        lines: draft.into_lines(),
    })
}

/// Resolves the lines being checked out: the caller's draft or the store's summary.
fn checkout_lines<S: StateStorage>(
    store: &OrderStore<S>,
    request: CheckoutRequest,
) -> Vec<OrderLineItem> {
    request.lines.map_or_else(
        || assemble_summary(store.items()),
        |lines| SummaryDraft::from_lines(lines).ordered_lines(),
    )
}

/// Resets the store after a completed checkout.
fn close_order<S: StateStorage>(
    store: &mut OrderStore<S>,
    message: &str,
) -> Result<CheckoutResponse, ApiError> {
    let closed: String = store.order_number().to_string();
    absorb_persistence_failure(store.reset())?;

    Ok(CheckoutResponse {
        closed_order_number: Some(closed),
        order_number: store.order_number().to_string(),
        message: message.to_string(),
    })
}

/// Exports the order and starts a new session.
///
/// The document is rendered before the store is reset.
///
/// # Errors
///
/// Returns `ApiError::ValidationFailed` if the email is missing, the draft is
/// empty, or a line breaks a limit, and `ApiError::Internal` if rendering
/// fails. The store is unchanged on error.
pub fn export_order<S: StateStorage>(
    store: &mut OrderStore<S>,
    request: CheckoutRequest,
) -> Result<RenderedExport, ApiError> {
    let lines: Vec<OrderLineItem> = checkout_lines(store, request);
    validate_export(store.customer(), &lines)?;

    let document: ExportDocument = build_export_document(store.customer(), &lines);
    let csv: String = document.to_csv()?;
    info!(
        file_name = %document.file_name,
        lines = lines.len(),
        "Exported order"
    );

    close_order(store, "Order exported")?;
    Ok(RenderedExport { document, csv })
}

/// Submits the order and starts a new session.
///
/// # Errors
///
/// Returns `ApiError::ValidationFailed` if the order is incomplete and
/// `ApiError::SubmissionFailed` if the submitter rejects it. The store is
/// unchanged on error.
pub fn submit_order<S: StateStorage>(
    store: &mut OrderStore<S>,
    submitter: &dyn OrderSubmitter,
    request: CheckoutRequest,
) -> Result<CheckoutResponse, ApiError> {
    let lines: Vec<OrderLineItem> = checkout_lines(store, request);
    validate_order_payload(store.customer(), &lines).map_err(translate_domain_error)?;

    let payload: SubmissionPayload = SubmissionPayload {
        order: lines,
        customer: store.customer().clone(),
    };
    submitter.submit(&payload).map_err(|reason| {
        warn!(
            order_number = %payload.customer.order_number,
            reason = %reason,
            "Order submission failed"
        );
        ApiError::SubmissionFailed { reason }
    })?;
    info!(
        order_number = %payload.customer.order_number,
        lines = payload.order.len(),
        "Order submitted"
    );

    close_order(store, "Order submitted")
}

/// Discards the order and starts a new session.
///
/// # Errors
///
/// Does not currently fail; persistence failures are logged.
pub fn reset_order<S: StateStorage>(
    store: &mut OrderStore<S>,
) -> Result<CheckoutResponse, ApiError> {
    absorb_persistence_failure(store.reset())?;
    Ok(CheckoutResponse {
        closed_order_number: None,
        order_number: store.order_number().to_string(),
        message: String::from("Order reset"),
    })
}
