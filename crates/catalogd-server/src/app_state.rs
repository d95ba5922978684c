// ABOUTME: Shared application state for the catalogd HTTP server.
// ABOUTME: Holds the product store behind an async RwLock for use by all handlers.

use std::sync::Arc;

use catalogd_store::ProductStore;
use tokio::sync::RwLock;

/// Shared application state accessible by all Axum handlers. The RwLock
/// serializes mutations; reads take snapshots.
pub struct AppState {
    pub store: RwLock<ProductStore>,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Wrap an opened store for sharing across handlers.
    pub fn new(store: ProductStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }
}
