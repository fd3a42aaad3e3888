//! # Catalog Engine
//!
//! The core of a product catalog: SKU-keyed products with uniqueness on create,
//! merge-patch updates, existence-checked reads and deletes, and deterministic
//! pagination over insertion order.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine knows nothing about HTTP, files, or processes
//! - **Atomic store primitives**: every check-then-write happens under one lock
//! - **Explicit ownership**: the store is a value handed to the service, not a global
//! - **Typed patches**: partial updates are an optional-field struct, not a loose map
//!
//! ## Core Concepts
//!
//! ### Products
//!
//! A [`Product`] has a `sku` (unique, immutable), `title`, `description` and
//! `qty`. A [`ProductPatch`] carries any subset of the mutable fields.
//!
//! ### Store
//!
//! [`ProductStore`] is the storage seam; [`InMemoryStore`] keeps products in
//! insertion order and survives deletes without reordering the rest.
//!
//! ### Pagination
//!
//! [`paginate`] maps a sequence length and a [`PageRequest`] to an index range
//! and a [`Pagination`] summary. Pages past the end are empty, not errors.
//!
//! ### Service
//!
//! [`CatalogService`] applies the business rules and reports every result as an
//! [`Outcome`] carrying a human-readable message.
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog_engine::{CatalogService, InMemoryStore, PageRequest, Product, ProductPatch};
//!
//! let catalog = CatalogService::new(InMemoryStore::new());
//!
//! let outcome = catalog.create_product(Product::new("sku-1", "Mug", "Ceramic mug", 10));
//! assert_eq!(outcome.message(), "Product with sku: sku-1 created successfully!");
//!
//! let outcome = catalog.update_product("sku-1", ProductPatch::new().qty(4));
//! assert_eq!(outcome.data().map(|p| p.qty), Some(4));
//!
//! let page = catalog.list_products(PageRequest::default()).into_data().unwrap();
//! assert_eq!(page.pagination.total, 1);
//! ```
//!
//! ## Persistence
//!
//! Use [`InMemoryStore::export_state`] and [`InMemoryStore::from_snapshot`] with
//! [`CatalogSnapshot`] to persist the catalog. Snapshots keep insertion order.

pub mod error;
pub mod pagination;
pub mod product;
pub mod service;
pub mod snapshot;
pub mod store;

// Re-export main types at crate root
pub use error::Error;
pub use pagination::{
    paginate, PageRequest, PageWindow, Pagination, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
};
pub use product::{Product, ProductPatch};
pub use service::{CatalogService, Outcome, ProductPage};
pub use snapshot::{CatalogSnapshot, SNAPSHOT_FORMAT_VERSION};
pub use store::{InMemoryStore, ProductStore};

/// Type aliases for clarity
pub type Sku = String;
pub type Quantity = u32;
