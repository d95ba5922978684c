// ABOUTME: HTTP server for catalogd, exposing the product catalog over a REST API.
// ABOUTME: Uses Axum with a shared product store for CRUD operations.

pub mod api;
pub mod app_state;
pub mod config;
pub mod routes;

pub use app_state::{AppState, SharedState};
pub use config::{CatalogdConfig, ConfigError};
pub use routes::create_router;
