//! Product endpoint routes.

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, Query, State},
    response::Response,
    routing::get,
    Json, Router,
};
use catalog_engine::Product;

use crate::error::Result;
use crate::handlers::{
    handle_create, handle_delete, handle_get, handle_list, handle_update, ListQuery,
};
use crate::AppState;

/// Create product routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_handler).post(create_handler))
        .route("/products/", get(list_handler))
        .route(
            "/products/{sku}",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
}

/// POST /products - Create a product.
async fn create_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Product>, JsonRejection>,
) -> Result<Response> {
    let Json(product) = payload?;
    Ok(handle_create(&*state.catalog, product))
}

/// GET /products - List products one page at a time.
///
/// The query is taken as raw pairs so repeated or malformed parameters fall
/// back to defaults rather than rejecting the request.
async fn list_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    handle_list(&*state.catalog, &ListQuery::from_pairs(pairs))
}

/// GET /products/{sku} - Fetch a product.
async fn get_handler(State(state): State<AppState>, Path(sku): Path<String>) -> Response {
    handle_get(&*state.catalog, &sku)
}

/// PUT /products/{sku} - Partially update a product.
async fn update_handler(
    State(state): State<AppState>,
    Path(sku): Path<String>,
    body: Bytes,
) -> Result<Response> {
    handle_update(&*state.catalog, &sku, body)
}

/// DELETE /products/{sku} - Delete a product.
async fn delete_handler(State(state): State<AppState>, Path(sku): Path<String>) -> Response {
    handle_delete(&*state.catalog, &sku)
}
