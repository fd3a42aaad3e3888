//! Health check endpoint.

use axum::{extract::State, routing::get, Json, Router};
use catalog_engine::ProductStore;
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub products: usize,
}

/// Create health routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (status, products) = match state.catalog.store().len() {
        Ok(count) => ("ok", count),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            ("degraded", 0)
        }
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        products,
    })
}

/// Root handler.
async fn root() -> &'static str {
    "SKU Catalog Server"
}
