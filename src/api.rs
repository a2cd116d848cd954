// HTTP Resource Interface - REST API with Axum
//
// Maps the five /bills operations onto BillRegistry calls and shapes the
// responses. No business logic lives here: handlers route, delegate and
// translate outcomes into status codes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::bill::BillDraft;
use crate::registry::BillRegistry;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub registry: Arc<BillRegistry>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            registry: Arc::new(BillRegistry::new()),
        }
    }
}

/// Health response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    bills: usize,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /health - Health check
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        service: "bills-tracker",
        version: crate::VERSION,
        bills: state.registry.len(),
    })
}

/// GET /bills - Get all bills (empty array when none)
async fn list_bills(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.registry.list_all())
}

/// POST /bills - Add a new bill; the registry assigns its id.
/// Any id in the request body is ignored.
async fn add_bill(
    State(state): State<AppState>,
    Json(draft): Json<BillDraft>,
) -> impl IntoResponse {
    let bill = state.registry.add(draft);
    (StatusCode::OK, Json(bill))
}

/// GET /bills/:id - Get a bill by id, or 404 with an empty body
async fn get_bill(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.registry.get_by_id(id) {
        Some(bill) => (StatusCode::OK, Json(bill)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// PUT /bills/:id - Update an existing bill's name, amount and due date
async fn update_bill(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<BillDraft>,
) -> Response {
    match state.registry.update(id, draft) {
        Some(_) => (StatusCode::OK, "Bill updated successfully!").into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// DELETE /bills/:id - Delete a bill by id
async fn delete_bill(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    if state.registry.delete(id) {
        (StatusCode::OK, "Bill deleted successfully!").into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

// ============================================================================
// Router
// ============================================================================

/// Build the application router over the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/bills", get(list_bills).post(add_bill))
        .route(
            "/bills/:id",
            get(get_bill).put(update_bill).delete(delete_bill),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ============================================================================
// TESTS
// ============================================================================
