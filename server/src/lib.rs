//! SKU Catalog Server - HTTP surface for the product catalog.
//!
//! Exposes the [`catalog_engine`] operations as JSON endpoints. Every response
//! is wrapped in a `{status, message, ...}` envelope; catalog failures such as
//! duplicate or unknown SKUs come back as `status: false` with a message.

pub mod config;
pub mod error;
pub mod handlers;
pub mod persistence;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use catalog_engine::{CatalogService, InMemoryStore};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService<InMemoryStore>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build state around an existing store.
    pub fn new(store: InMemoryStore, config: Config) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(store)),
            config: Arc::new(config),
        }
    }
}

/// Build the application router with its middleware stack.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}
