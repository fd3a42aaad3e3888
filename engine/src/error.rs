//! Error types for the catalog engine.

use crate::Sku;
use thiserror::Error;

/// All possible errors from the catalog engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Catalog errors
    #[error("product already exists: {0}")]
    Conflict(Sku),

    #[error("product not found: {0}")]
    NotFound(Sku),

    // State errors
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("store unavailable: lock poisoned")]
    StoreUnavailable,
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
