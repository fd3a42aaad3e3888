//! Catalog service - business rules on top of a [`ProductStore`].
//!
//! The service turns store results into [`Outcome`]s carrying the
//! human-readable message the outer layer reports. Conflicts and missing SKUs
//! are ordinary failures here, never faults.

use crate::{
    error::Error, paginate, PageRequest, Pagination, Product, ProductPatch, ProductStore,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Result of a catalog operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The operation succeeded.
    Success { message: String, data: T },
    /// The operation was refused.
    Failure { error: Error, message: String },
}

impl<T> Outcome<T> {
    fn success(message: String, data: T) -> Self {
        Outcome::Success { message, data }
    }

    fn failure(error: Error) -> Self {
        let message = failure_message(&error);
        Outcome::Failure { error, message }
    }

    /// Check if the operation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// The message describing the outcome.
    pub fn message(&self) -> &str {
        match self {
            Outcome::Success { message, .. } | Outcome::Failure { message, .. } => message,
        }
    }

    /// The payload, if the operation succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success { data, .. } => Some(data),
            Outcome::Failure { .. } => None,
        }
    }

    /// Consume the outcome, returning the payload if the operation succeeded.
    pub fn into_data(self) -> Option<T> {
        match self {
            Outcome::Success { data, .. } => Some(data),
            Outcome::Failure { .. } => None,
        }
    }

    /// The error, if the operation failed.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { error, .. } => Some(error),
        }
    }
}

fn failure_message(error: &Error) -> String {
    match error {
        Error::Conflict(sku) => format!("Product with sku: {sku} already exist!"),
        Error::NotFound(sku) => format!("Product with sku: {sku} doesn't exist!"),
        Error::InvalidSnapshot(reason) => format!("Invalid catalog snapshot: {reason}"),
        Error::StoreUnavailable => "Catalog store is unavailable".to_string(),
    }
}

/// One page of products plus its pagination summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

/// Business operations over a product catalog.
///
/// The service owns its store; share the service itself (e.g. behind an `Arc`)
/// rather than reaching for a global.
#[derive(Debug, Default)]
pub struct CatalogService<S> {
    store: S,
}

impl<S: ProductStore> CatalogService<S> {
    /// Create a service over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add a product with a SKU not yet in the catalog.
    #[instrument(skip(self, product), fields(sku = %product.sku))]
    pub fn create_product(&self, product: Product) -> Outcome<Product> {
        match self.store.create(product) {
            Ok(created) => {
                info!("Product created");
                let message = format!("Product with sku: {} created successfully!", created.sku);
                Outcome::success(message, created)
            }
            Err(e) => {
                warn!(error = %e, "Product creation refused");
                Outcome::failure(e)
            }
        }
    }

    /// Look up a product by SKU.
    #[instrument(skip(self))]
    pub fn get_product(&self, sku: &str) -> Outcome<Product> {
        match self.store.get(sku) {
            Ok(product) => {
                debug!("Product found");
                Outcome::success(format!("Showing product with sku: {sku}"), product)
            }
            Err(e) => {
                debug!(error = %e, "Product lookup failed");
                Outcome::failure(e)
            }
        }
    }

    /// Merge `patch` into an existing product.
    #[instrument(skip(self))]
    pub fn update_product(&self, sku: &str, patch: ProductPatch) -> Outcome<Product> {
        if patch.is_empty() {
            debug!("Empty patch, fields left unchanged");
        }

        match self.store.update(sku, patch) {
            Ok(product) => {
                info!("Product updated");
                Outcome::success(format!("Product with sku: {sku} updated!"), product)
            }
            Err(e) => {
                warn!(error = %e, "Product update refused");
                Outcome::failure(e)
            }
        }
    }

    /// Remove a product. The removed record is returned as the payload.
    #[instrument(skip(self))]
    pub fn delete_product(&self, sku: &str) -> Outcome<Product> {
        match self.store.delete(sku) {
            Ok(product) => {
                info!("Product deleted");
                Outcome::success(format!("Product with sku: {sku} deleted!"), product)
            }
            Err(e) => {
                warn!(error = %e, "Product deletion refused");
                Outcome::failure(e)
            }
        }
    }

    /// List one page of products in insertion order.
    #[instrument(skip(self), fields(page = request.page(), page_size = request.page_size()))]
    pub fn list_products(&self, request: PageRequest) -> Outcome<ProductPage> {
        let all = match self.store.list() {
            Ok(all) => all,
            Err(e) => {
                warn!(error = %e, "Product listing failed");
                return Outcome::failure(e);
            }
        };

        let window = paginate(all.len(), request);
        let products = window.slice(&all).to_vec();
        debug!(
            total = window.pagination.total,
            showing = window.pagination.showing,
            "Products listed"
        );

        Outcome::success(
            "Showing available products".to_string(),
            ProductPage {
                products,
                pagination: window.pagination,
            },
        )
    }
}
