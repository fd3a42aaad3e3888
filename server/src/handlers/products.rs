//! Product handlers - translate catalog outcomes into response envelopes.

use crate::error::{status_for, AppError, Result};
use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_engine::{
    CatalogService, Outcome, PageRequest, Pagination, Product, ProductPatch, ProductStore,
};
use serde::{Deserialize, Serialize};

/// Query parameters for listing products.
///
/// Kept as raw strings so unparseable values fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Default)]
pub struct ListQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

impl ListQuery {
    /// Collect `page` and `size` from decoded query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" if query.page.is_none() => query.page = Some(value),
                "size" if query.size.is_none() => query.size = Some(value),
                _ => {}
            }
        }
        query
    }

    /// Resolve the requested page, applying defaults.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_params(self.page.as_deref(), self.size.as_deref())
    }
}

/// Envelope carrying only a status flag and message.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusMessage {
    pub status: bool,
    pub message: String,
}

impl StatusMessage {
    /// A failed envelope.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
        }
    }
}

/// Envelope for single-product responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    pub status: bool,
    pub message: String,
    pub product: Product,
}

/// Envelope for product listings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub status: bool,
    pub message: String,
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

fn failure(error: &catalog_engine::Error, message: String) -> Response {
    (status_for(error), Json(StatusMessage::failure(message))).into_response()
}

fn product_response(outcome: Outcome<Product>, success: StatusCode) -> Response {
    match outcome {
        Outcome::Success { message, data } => (
            success,
            Json(ProductResponse {
                status: true,
                message,
                product: data,
            }),
        )
            .into_response(),
        Outcome::Failure { error, message } => failure(&error, message),
    }
}

/// Parse an update body. An empty body is an empty patch.
pub fn parse_patch(body: &[u8]) -> Result<ProductPatch> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ProductPatch::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid product update: {e}")))
}

/// Create a product.
pub fn handle_create<S: ProductStore>(catalog: &CatalogService<S>, product: Product) -> Response {
    product_response(catalog.create_product(product), StatusCode::CREATED)
}

/// Fetch a product by SKU.
pub fn handle_get<S: ProductStore>(catalog: &CatalogService<S>, sku: &str) -> Response {
    product_response(catalog.get_product(sku), StatusCode::OK)
}

/// Apply a partial update to a product.
pub fn handle_update<S: ProductStore>(
    catalog: &CatalogService<S>,
    sku: &str,
    body: Bytes,
) -> Result<Response> {
    let patch = parse_patch(&body)?;
    Ok(product_response(
        catalog.update_product(sku, patch),
        StatusCode::OK,
    ))
}

/// Delete a product.
pub fn handle_delete<S: ProductStore>(catalog: &CatalogService<S>, sku: &str) -> Response {
    match catalog.delete_product(sku) {
        Outcome::Success { message, .. } => Json(StatusMessage {
            status: true,
            message,
        })
        .into_response(),
        Outcome::Failure { error, message } => failure(&error, message),
    }
}

/// List one page of products.
pub fn handle_list<S: ProductStore>(catalog: &CatalogService<S>, query: &ListQuery) -> Response {
    match catalog.list_products(query.page_request()) {
        Outcome::Success { message, data } => Json(ProductListResponse {
            status: true,
            message,
            products: data.products,
            pagination: data.pagination,
        })
        .into_response(),
        Outcome::Failure { error, message } => failure(&error, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_engine::InMemoryStore;

    fn catalog() -> CatalogService<InMemoryStore> {
        CatalogService::new(InMemoryStore::new())
    }

    #[test]
    fn list_query_defaults() {
        let query = ListQuery::default();
        assert_eq!(query.page_request(), PageRequest::default());

        let query = ListQuery {
            page: Some("x".into()),
            size: Some("5".into()),
        };
        assert_eq!(query.page_request(), PageRequest::new(1, 5));
    }

    #[test]
    fn list_query_repeated_keys() {
        let pairs = [
            ("page", "2"),
            ("page", "7"),
            ("sort", "title"),
            ("size", "abc"),
            ("size", "5"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()));

        let query = ListQuery::from_pairs(pairs);
        assert_eq!(query.page.as_deref(), Some("2"));
        assert_eq!(query.page_request(), PageRequest::new(2, 100));
    }

    #[test]
    fn parse_empty_patch() {
        assert_eq!(parse_patch(b"").unwrap(), ProductPatch::default());
        assert_eq!(parse_patch(b"  \n").unwrap(), ProductPatch::default());
    }

    #[test]
    fn parse_partial_patch() {
        let patch = parse_patch(br#"{"qty": 10}"#).unwrap();
        assert_eq!(patch, ProductPatch::new().qty(10));
    }

    #[test]
    fn parse_invalid_patch() {
        assert!(matches!(
            parse_patch(b"{not json"),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            parse_patch(br#"{"qty": "ten"}"#),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn create_statuses() {
        let catalog = catalog();
        let product = Product::new("sku-1", "t", "d", 1);

        assert_eq!(
            handle_create(&catalog, product.clone()).status(),
            StatusCode::CREATED
        );
        assert_eq!(
            handle_create(&catalog, product).status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn missing_sku_statuses() {
        let catalog = catalog();

        assert_eq!(handle_get(&catalog, "sku-5").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            handle_update(&catalog, "sku-5", Bytes::new())
                .unwrap()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            handle_delete(&catalog, "sku-5").status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn list_status() {
        let catalog = catalog();
        assert_eq!(
            handle_list(&catalog, &ListQuery::default()).status(),
            StatusCode::OK
        );
    }
}
