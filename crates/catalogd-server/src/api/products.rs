// ABOUTME: Product CRUD API handlers for listing, fetching, creating, updating, and deleting.
// ABOUTME: Maps store errors to HTTP statuses; validation reports pass through as 400 bodies.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalogd_core::Product;
use catalogd_store::StoreError;
use serde_json::Value;

use crate::app_state::SharedState;

/// Translate a store error into the response the boundary contract
/// promises: validation reports as 400 bodies, missing ids as 404,
/// persistence failures as 500.
fn error_response(err: StoreError) -> Response {
    match err {
        StoreError::Validation(report) => {
            (StatusCode::BAD_REQUEST, Json(report)).into_response()
        }
        StoreError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("product {} not found", id) })),
        )
            .into_response(),
        err @ (StoreError::Load(_) | StoreError::Write(_)) => {
            tracing::error!("store failure: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

/// GET /api/products - List all products.
pub async fn list_products(State(state): State<SharedState>) -> Json<Vec<Product>> {
    let store = state.store.read().await;
    Json(store.get_all())
}

/// GET /api/product/{id} - Fetch one product by id.
pub async fn get_product(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match id.parse::<u64>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "invalid product id" })),
            )
                .into_response();
        }
    };

    let store = state.store.read().await;
    match store.get(id) {
        Ok(product) => Json(product).into_response(),
        Err(err) => error_response(err),
    }
}

/// POST /api/product - Validate and store a new product.
pub async fn create_product(
    State(state): State<SharedState>,
    Json(candidate): Json<Value>,
) -> impl IntoResponse {
    let mut store = state.store.write().await;
    match store.create(&candidate) {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(err) => error_response(err),
    }
}

/// PUT /api/product - Validate and upsert a product under its own id.
pub async fn update_product(
    State(state): State<SharedState>,
    Json(candidate): Json<Value>,
) -> impl IntoResponse {
    let mut store = state.store.write().await;
    match store.update(&candidate) {
        Ok(product) => Json(product).into_response(),
        Err(err) => error_response(err),
    }
}

/// DELETE /api/product/{id} - Remove a product by id.
pub async fn delete_product(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match id.parse::<u64>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "invalid product id" })),
            )
                .into_response();
        }
    };

    let mut store = state.store.write().await;
    match store.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}
