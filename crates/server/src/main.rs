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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod submitter;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use galley_order::OrderStore;
use galley_order_api::{
    ApiError, CategoryListResponse, CategoryRowsResponse, CheckoutRequest, CheckoutResponse,
    DraftEditRequest, DraftRemoveRequest, DraftResponse, EditRowRequest, OrderResponse,
    OrderSubmitter, RenderedExport, SetCustomerRequest, SummaryResponse, UpdateItemRequest,
    edit_category_row, edit_summary_draft, export_order, get_category_rows, get_order,
    get_summary, list_categories, load_catalog_file, remove_summary_draft_line, reset_order,
    set_customer, submit_order, update_item,
};
use galley_order_domain::{Catalog, CategoryRowView};
use galley_order_persistence::{Persistence, StorageError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::submitter::LoggingSubmitter;

/// Galley Order Server - HTTP server for the provisioning order tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file holding the order.
    #[arg(short, long, conflicts_with = "state_file")]
    database: Option<String>,

    /// Path to a JSON file holding the order. If neither this nor
    /// `--database` is given, the order lives in an in-memory database.
    #[arg(short, long)]
    state_file: Option<String>,

    /// Path to the catalog JSON document.
    #[arg(short, long)]
    catalog: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The order store is wrapped in a Mutex so one request mutates it at a time.
#[derive(Clone)]
struct AppState {
    /// The order store and its persistence backend.
    store: Arc<Mutex<OrderStore<Persistence>>>,
    /// The product catalog, loaded once at startup.
    catalog: Arc<Catalog>,
    /// Where submitted orders are sent.
    submitter: Arc<dyn OrderSubmitter>,
}

/// Query parameters for a category page.
#[derive(Debug, Deserialize)]
struct CategoryQuery {
    /// Optional description filter.
    search: Option<String>,
}

/// Generic error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DomainRuleViolation { .. } | ApiError::ValidationFailed { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::SubmissionFailed { .. } => StatusCode::BAD_GATEWAY,
            ApiError::CatalogUnavailable { .. } | ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/categories` endpoint.
async fn handle_list_categories(
    AxumState(app_state): AxumState<AppState>,
) -> Json<CategoryListResponse> {
    info!("Handling list_categories request");
    Json(list_categories(&app_state.catalog))
}

/// Handler for GET `/categories/{name}` endpoint.
///
/// Returns the category's catalog rows merged with the current order.
async fn handle_get_category(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<CategoryRowsResponse>, HttpError> {
    info!(category = %name, "Handling get_category request");

    let store = app_state.store.lock().await;
    let response: CategoryRowsResponse = get_category_rows(
        &app_state.catalog,
        &store,
        &name,
        query.search.as_deref(),
    )?;

    Ok(Json(response))
}

/// Handler for POST `/categories/{name}/rows/{index}` endpoint.
///
/// Applies a category page edit with boundary clamping.
async fn handle_edit_row(
    AxumState(app_state): AxumState<AppState>,
    Path((name, index)): Path<(String, usize)>,
    Json(req): Json<EditRowRequest>,
) -> Result<Json<CategoryRowView>, HttpError> {
    info!(
        category = %name,
        index = index,
        field = req.field.as_str(),
        "Handling edit_row request"
    );

    let mut store = app_state.store.lock().await;
    let view: CategoryRowView =
        edit_category_row(&app_state.catalog, &mut store, &name, index, &req)?;

    Ok(Json(view))
}

/// Handler for POST `/items` endpoint.
async fn handle_update_item(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<OrderResponse>, HttpError> {
    info!(
        category = %req.category,
        index = req.index,
        field = req.field.as_str(),
        "Handling update_item request"
    );

    let mut store = app_state.store.lock().await;
    let response: OrderResponse = update_item(&app_state.catalog, &mut store, &req)?;

    Ok(Json(response))
}

/// Handler for POST `/customer` endpoint.
async fn handle_set_customer(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SetCustomerRequest>,
) -> Result<Json<OrderResponse>, HttpError> {
    info!(field = req.field.as_str(), "Handling set_customer request");

    let mut store = app_state.store.lock().await;
    let response: OrderResponse = set_customer(&mut store, req)?;

    Ok(Json(response))
}

/// Handler for GET `/order` endpoint.
async fn handle_get_order(AxumState(app_state): AxumState<AppState>) -> Json<OrderResponse> {
    let store = app_state.store.lock().await;
    Json(get_order(&store))
}

/// Handler for GET `/summary` endpoint.
async fn handle_get_summary(AxumState(app_state): AxumState<AppState>) -> Json<SummaryResponse> {
    let store = app_state.store.lock().await;
    Json(get_summary(&store))
}

/// Handler for POST `/summary/draft/edit` endpoint.
///
/// Edits the caller's summary draft; the stored order is unchanged.
async fn handle_edit_draft(
    Json(req): Json<DraftEditRequest>,
) -> Result<Json<DraftResponse>, HttpError> {
    info!(id = %req.id, field = req.field.as_str(), "Handling edit_draft request");
    Ok(Json(edit_summary_draft(req)?))
}

/// Handler for POST `/summary/draft/remove` endpoint.
async fn handle_remove_draft_line(
    Json(req): Json<DraftRemoveRequest>,
) -> Result<Json<DraftResponse>, HttpError> {
    info!(id = %req.id, "Handling remove_draft_line request");
    Ok(Json(remove_summary_draft_line(req)?))
}

/// Handler for POST `/export` endpoint.
///
/// Returns the order as a CSV attachment and starts a new order.
async fn handle_export(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Response, HttpError> {
    info!("Handling export request");

    let mut store = app_state.store.lock().await;
    let export: RenderedExport = export_order(&mut store, req)?;
    drop(store);

    let disposition: String = format!(
        "attachment; filename=\"{}\"",
        export.document.csv_file_name()
    );

    Ok((
        [
            (header::CONTENT_TYPE, String::from("text/csv; charset=utf-8")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.csv,
    )
        .into_response())
}

/// Handler for POST `/submit` endpoint.
async fn handle_submit(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, HttpError> {
    info!("Handling submit request");

    let mut store = app_state.store.lock().await;
    let response: CheckoutResponse =
        submit_order(&mut store, app_state.submitter.as_ref(), req)?;

    Ok(Json(response))
}

/// Handler for POST `/reset` endpoint.
async fn handle_reset(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<CheckoutResponse>, HttpError> {
    info!("Handling reset request");

    let mut store = app_state.store.lock().await;
    let response: CheckoutResponse = reset_order(&mut store)?;

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/categories", get(handle_list_categories))
        .route("/categories/{name}", get(handle_get_category))
        .route("/categories/{name}/rows/{index}", post(handle_edit_row))
        .route("/items", post(handle_update_item))
        .route("/customer", post(handle_set_customer))
        .route("/order", get(handle_get_order))
        .route("/summary", get(handle_get_summary))
        .route("/summary/draft/edit", post(handle_edit_draft))
        .route("/summary/draft/remove", post(handle_remove_draft_line))
        .route("/export", post(handle_export))
        .route("/submit", post(handle_submit))
        .route("/reset", post(handle_reset))
        .with_state(app_state)
}

/// Opens the persistence backend selected on the command line.
fn open_persistence(args: &Args) -> Result<Persistence, StorageError> {
    if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)
    } else if let Some(state_path) = &args.state_file {
        info!("Using JSON state file at: {}", state_path);
        Ok(Persistence::new_json_file(state_path))
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()
    }
}

/// Loads the catalog, falling back to an empty one.
fn load_catalog(args: &Args) -> Catalog {
    let Some(catalog_path) = &args.catalog else {
        warn!("No catalog given, starting with an empty catalog");
        return Catalog::new();
    };

    load_catalog_file(catalog_path).unwrap_or_else(|e| {
        error!(path = %catalog_path, error = %e, "Catalog unavailable, starting with an empty catalog");
        Catalog::new()
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Galley Order Server");

    let persistence: Persistence = open_persistence(&args)?;
    let backend: &'static str = persistence.backend_name();
    let catalog: Catalog = load_catalog(&args);
    let store: OrderStore<Persistence> = OrderStore::open(persistence);
    info!(
        backend = backend,
        order_number = %store.order_number(),
        categories = catalog.len(),
        "Order store ready"
    );

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
        catalog: Arc::new(catalog),
        submitter: Arc::new(LoggingSubmitter),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
