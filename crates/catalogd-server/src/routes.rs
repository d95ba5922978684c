// ABOUTME: Route definitions for the catalogd HTTP API.
// ABOUTME: Assembles all API routes into a single Axum Router with CORS and request tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;

/// Build the complete Axum router with all routes and shared state.
/// CORS is permissive (the browser UI is served from a different origin)
/// and every request is traced.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/products", get(api::products::list_products))
        .route(
            "/api/product",
            post(api::products::create_product).put(api::products::update_product),
        )
        .route(
            "/api/product/{id}",
            get(api::products::get_product).delete(api::products::delete_product),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler. Returns 200 OK with a simple JSON body.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
