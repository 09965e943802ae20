// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{
    RecordingSubmitter, RejectingSubmitter, complete_customer, create_test_catalog,
    create_test_store,
};
use crate::{
    ApiError, CategoryListResponse, CategoryRowsResponse, CheckoutRequest, CheckoutResponse,
    DraftEditRequest, DraftRemoveRequest, DraftResponse, EditRowRequest, OrderResponse,
    RenderedExport, SetCustomerRequest, SummaryResponse, UpdateItemRequest, edit_category_row,
    edit_summary_draft, export_order, get_category_rows, get_order, get_summary,
    list_categories, remove_summary_draft_line, reset_order, set_customer, submit_order,
    update_item,
};
use galley_order::OrderStore;
use galley_order_domain::{
    Catalog, CategoryRowView, CustomerField, ItemField, ItemUpdate, LineItemKey, MAX_QUANTITY,
    OrderLineItem, OrderNumber,
};
use galley_order_persistence::MemoryStorage;

fn edit(field: ItemField, value: &str) -> EditRowRequest {
    EditRowRequest {
        field,
        value: value.to_string(),
    }
}

#[test]
fn test_list_categories_in_catalog_order() {
    let response: CategoryListResponse = list_categories(&create_test_catalog());
    assert_eq!(response.categories, vec!["Produce", "Dairy"]);
}

#[test]
fn test_category_rows_default_to_empty_order() {
    let catalog: Catalog = create_test_catalog();
    let store: OrderStore<MemoryStorage> = create_test_store();

    let response: CategoryRowsResponse =
        get_category_rows(&catalog, &store, "Produce", None).unwrap();

    assert_eq!(response.rows.len(), 3);
    assert_eq!(response.rows[1].id.to_string(), "Produce-1");
    assert_eq!(response.rows[1].quantity, 0);
    assert_eq!(response.rows[1].chef_comment, "");
}

#[test]
fn test_category_rows_search_filters_description() {
    let catalog: Catalog = create_test_catalog();
    let store: OrderStore<MemoryStorage> = create_test_store();

    let response: CategoryRowsResponse =
        get_category_rows(&catalog, &store, "Produce", Some("LEM")).unwrap();

    assert_eq!(response.rows.len(), 1);
    assert_eq!(response.rows[0].description, "Lemons");
    assert_eq!(response.rows[0].id.index(), 1);
}

#[test]
fn test_unknown_category_is_not_found() {
    let catalog: Catalog = create_test_catalog();
    let store: OrderStore<MemoryStorage> = create_test_store();

    let result: Result<CategoryRowsResponse, ApiError> =
        get_category_rows(&catalog, &store, "Bakery", None);

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_edit_category_row_clamps_and_syncs_catalog_details() {
    let catalog: Catalog = create_test_catalog();
    let mut store: OrderStore<MemoryStorage> = create_test_store();

    let view: CategoryRowView = edit_category_row(
        &catalog,
        &mut store,
        "Produce",
        1,
        &edit(ItemField::Quantity, "150000"),
    )
    .unwrap();

    assert_eq!(view.quantity, MAX_QUANTITY);
    let stored: &OrderLineItem = &store.items_for("Produce")[0];
    assert_eq!(stored.quantity, MAX_QUANTITY);
    assert_eq!(stored.bin_code.as_deref(), Some("P-02"));
    assert_eq!(stored.description, "Lemons");
    assert_eq!(stored.packaging, "1kg bag");
}

#[test]
fn test_edit_category_row_negative_quantity_becomes_zero() {
    let catalog: Catalog = create_test_catalog();
    let mut store: OrderStore<MemoryStorage> = create_test_store();

    let view: CategoryRowView = edit_category_row(
        &catalog,
        &mut store,
        "Dairy",
        0,
        &edit(ItemField::Quantity, "-3"),
    )
    .unwrap();

    assert_eq!(view.quantity, 0);
}

#[test]
fn test_edit_category_row_outside_catalog_is_not_found() {
    let catalog: Catalog = create_test_catalog();
    let mut store: OrderStore<MemoryStorage> = create_test_store();

    let result: Result<CategoryRowView, ApiError> = edit_category_row(
        &catalog,
        &mut store,
        "Dairy",
        4,
        &edit(ItemField::Quantity, "1"),
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
    assert!(store.items().is_empty());
}

#[test]
fn test_update_item_does_not_clamp() {
    let catalog: Catalog = create_test_catalog();
    let mut store: OrderStore<MemoryStorage> = create_test_store();
    let request: UpdateItemRequest = UpdateItemRequest {
        category: String::from("Produce"),
        index: 0,
        field: ItemField::Quantity,
        value: String::from("150000"),
    };

    let result: Result<OrderResponse, ApiError> = update_item(&catalog, &mut store, &request);

    assert!(matches!(result, Err(ApiError::ValidationFailed { .. })));
    assert!(store.items().is_empty());
}

#[test]
fn test_update_item_rejects_non_numeric_quantity() {
    let catalog: Catalog = create_test_catalog();
    let mut store: OrderStore<MemoryStorage> = create_test_store();
    let request: UpdateItemRequest = UpdateItemRequest {
        category: String::from("Produce"),
        index: 0,
        field: ItemField::Quantity,
        value: String::from("two"),
    };

    let result: Result<OrderResponse, ApiError> = update_item(&catalog, &mut store, &request);

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_end_to_end_produce_scenario() {
    let catalog: Catalog = create_test_catalog();
    let mut store: OrderStore<MemoryStorage> = create_test_store();

    for (field, value) in [(ItemField::Quantity, "3"), (ItemField::ChefComment, "ripe")] {
        let request: UpdateItemRequest = UpdateItemRequest {
            category: String::from("Produce"),
            index: 0,
            field,
            value: value.to_string(),
        };
        update_item(&catalog, &mut store, &request).unwrap();
    }

    let order: OrderResponse = get_order(&store);
    let lines: &Vec<OrderLineItem> = &order.items["Produce"];
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].id.to_string(), "Produce-0");
    assert_eq!(lines[0].quantity, 3);
    assert_eq!(lines[0].chef_comment.as_deref(), Some("ripe"));
    assert_eq!(lines[0].description, "");
    assert_eq!(lines[0].packaging, "");
}

#[test]
fn test_set_customer_updates_order() {
    let mut store: OrderStore<MemoryStorage> = create_test_store();

    let order: OrderResponse = set_customer(
        &mut store,
        SetCustomerRequest {
            field: CustomerField::Phone,
            value: String::from("555-0101"),
        },
    )
    .unwrap();

    assert_eq!(order.customer.phone, "555-0101");
    assert!(store.storage().document().unwrap().contains("555-0101"));
}

#[test]
fn test_summary_lists_positive_lines_only() {
    let catalog: Catalog = create_test_catalog();
    let mut store: OrderStore<MemoryStorage> = create_test_store();
    store
        .update_item(&catalog, LineItemKey::new("Produce", 0), ItemUpdate::Quantity(2))
        .unwrap();
    store
        .update_item(&catalog, LineItemKey::new("Produce", 1), ItemUpdate::Quantity(0))
        .unwrap();

    let summary: SummaryResponse = get_summary(&store);

    assert_eq!(summary.lines.len(), 1);
    assert_eq!(summary.order_number, store.order_number().to_string());
}

#[test]
fn test_export_uses_draft_and_resets_store() {
    let catalog: Catalog = create_test_catalog();
    let mut store: OrderStore<MemoryStorage> = create_test_store();
    complete_customer(&mut store);
    store
        .update_item(&catalog, LineItemKey::new("Produce", 0), ItemUpdate::Quantity(2))
        .unwrap();
    let before: OrderNumber = store.order_number().clone();

    let mut draft: Vec<OrderLineItem> = get_summary(&store).lines;
    draft[0].apply_update(ItemUpdate::Quantity(5));

    let export: RenderedExport = export_order(
        &mut store,
        CheckoutRequest { lines: Some(draft) },
    )
    .unwrap();

    assert_eq!(export.document.file_name, format!("Order_{before}.xlsx"));
    assert_eq!(export.document.rows.last().unwrap()[4], "5");
    assert_eq!(export.csv, export.document.to_csv().unwrap());
    assert!(export.csv.contains(&before.to_string()));
    assert!(store.items().is_empty());
    assert_ne!(store.order_number(), &before);
    assert!(store.storage().document().is_none());
}

#[test]
fn test_draft_edits_are_not_written_back() {
    let catalog: Catalog = create_test_catalog();
    let mut store: OrderStore<MemoryStorage> = create_test_store();
    complete_customer(&mut store);
    store
        .update_item(&catalog, LineItemKey::new("Dairy", 0), ItemUpdate::Quantity(2))
        .unwrap();

    let mut draft: Vec<OrderLineItem> = get_summary(&store).lines;
    draft[0].apply_update(ItemUpdate::Quantity(MAX_QUANTITY + 1));

    let result: Result<RenderedExport, ApiError> =
        export_order(&mut store, CheckoutRequest { lines: Some(draft) });

    assert!(matches!(
        result,
        Err(ApiError::ValidationFailed { ref field, .. }) if field == "quantity"
    ));
    assert_eq!(store.items_for("Dairy")[0].quantity, 2);
}

#[test]
fn test_export_without_email_leaves_store_unchanged() {
    let catalog: Catalog = create_test_catalog();
    let mut store: OrderStore<MemoryStorage> = create_test_store();
    store
        .update_item(&catalog, LineItemKey::new("Dairy", 0), ItemUpdate::Quantity(2))
        .unwrap();
    let before: OrderNumber = store.order_number().clone();

    let result: Result<RenderedExport, ApiError> =
        export_order(&mut store, CheckoutRequest::default());

    assert!(matches!(
        result,
        Err(ApiError::ValidationFailed { ref field, .. }) if field == "email"
    ));
    assert_eq!(store.order_number(), &before);
    assert_eq!(store.items_for("Dairy").len(), 1);
}

#[test]
fn test_submit_hands_payload_to_submitter_and_resets() {
    let catalog: Catalog = create_test_catalog();
    let mut store: OrderStore<MemoryStorage> = create_test_store();
    complete_customer(&mut store);
    store
        .update_item(&catalog, LineItemKey::new("Produce", 2), ItemUpdate::Quantity(4))
        .unwrap();
    let before: String = store.order_number().to_string();
    let submitter: RecordingSubmitter = RecordingSubmitter::default();

    let response: CheckoutResponse =
        submit_order(&mut store, &submitter, CheckoutRequest::default()).unwrap();

    let received = submitter.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].order.len(), 1);
    assert_eq!(received[0].customer.boat_name, "Sea Breeze");
    assert_eq!(response.closed_order_number.as_deref(), Some(before.as_str()));
    assert_ne!(response.order_number, before);
    assert!(store.items().is_empty());
}

#[test]
fn test_submit_requires_customer_fields() {
    let catalog: Catalog = create_test_catalog();
    let mut store: OrderStore<MemoryStorage> = create_test_store();
    store
        .update_item(&catalog, LineItemKey::new("Produce", 2), ItemUpdate::Quantity(4))
        .unwrap();
    let submitter: RecordingSubmitter = RecordingSubmitter::default();

    let result: Result<CheckoutResponse, ApiError> =
        submit_order(&mut store, &submitter, CheckoutRequest::default());

    assert_eq!(
        result,
        Err(ApiError::ValidationFailed {
            field: String::from("Boat Name"),
            message: String::from("Boat Name is required"),
        })
    );
    assert!(submitter.received.lock().unwrap().is_empty());
}

#[test]
fn test_failed_submission_keeps_order() {
    let catalog: Catalog = create_test_catalog();
    let mut store: OrderStore<MemoryStorage> = create_test_store();
    complete_customer(&mut store);
    store
        .update_item(&catalog, LineItemKey::new("Produce", 2), ItemUpdate::Quantity(4))
        .unwrap();
    let before: OrderNumber = store.order_number().clone();

    let result: Result<CheckoutResponse, ApiError> =
        submit_order(&mut store, &RejectingSubmitter, CheckoutRequest::default());

    assert_eq!(
        result,
        Err(ApiError::SubmissionFailed {
            reason: String::from("mail relay unreachable"),
        })
    );
    assert_eq!(store.order_number(), &before);
    assert_eq!(store.items_for("Produce")[0].quantity, 4);
}

#[test]
fn test_reset_order_starts_new_session() {
    let mut store: OrderStore<MemoryStorage> = create_test_store();
    complete_customer(&mut store);
    let before: String = store.order_number().to_string();

    let response: CheckoutResponse = reset_order(&mut store).unwrap();

    assert_eq!(response.closed_order_number, None);
    assert_ne!(response.order_number, before);
    assert_eq!(store.customer().email, "");
}

#[test]
fn test_summary_draft_edit_clamps_without_touching_store() {
    let catalog: Catalog = create_test_catalog();
    let mut store: OrderStore<MemoryStorage> = create_test_store();
    store
        .update_item(&catalog, LineItemKey::new("Produce", 0), ItemUpdate::Quantity(2))
        .unwrap();

    let response: DraftResponse = edit_summary_draft(DraftEditRequest {
        lines: get_summary(&store).lines,
        id: LineItemKey::new("Produce", 0),
        field: ItemField::Quantity,
        value: String::from("250000"),
    })
    .unwrap();

    assert_eq!(response.lines[0].quantity, MAX_QUANTITY);
    assert_eq!(store.items_for("Produce")[0].quantity, 2);
}

#[test]
fn test_summary_draft_remove_drops_line_from_export() {
    let catalog: Catalog = create_test_catalog();
    let mut store: OrderStore<MemoryStorage> = create_test_store();
    complete_customer(&mut store);
    store
        .update_item(&catalog, LineItemKey::new("Produce", 0), ItemUpdate::Quantity(2))
        .unwrap();
    store
        .update_item(&catalog, LineItemKey::new("Dairy", 0), ItemUpdate::Quantity(1))
        .unwrap();

    let response: DraftResponse = remove_summary_draft_line(DraftRemoveRequest {
        lines: get_summary(&store).lines,
        id: LineItemKey::new("Produce", 0),
    })
    .unwrap();
    assert_eq!(response.lines.len(), 1);
    assert_eq!(store.items_for("Produce").len(), 1);

    let export: RenderedExport = export_order(
        &mut store,
        CheckoutRequest {
            lines: Some(response.lines),
        },
    )
    .unwrap();
    assert_eq!(export.document.rows.last().unwrap()[0], "Dairy");
    assert!(!export.csv.contains("Produce"));
}

#[test]
fn test_summary_draft_unknown_line_is_not_found() {
    let result: Result<DraftResponse, ApiError> = remove_summary_draft_line(DraftRemoveRequest {
        lines: Vec::new(),
        id: LineItemKey::new("Produce", 0),
    });

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
