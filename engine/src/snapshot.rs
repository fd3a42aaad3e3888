//! Snapshot types for persisting and restoring store state.
//!
//! Snapshots are the bridge between the in-memory store and persistent storage.
//! Products are kept as an ordered list so insertion order survives a restart.

use crate::{error::Result, Error, Product};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Version of the snapshot format for future compatibility.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// A point-in-time snapshot of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    /// Snapshot format version
    pub format_version: u32,
    /// All products, in insertion order
    pub products: Vec<Product>,
}

impl Default for CatalogSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSnapshot {
    /// Create a new empty snapshot.
    pub fn new() -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            products: Vec::new(),
        }
    }

    /// Append a product to the snapshot.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Count products in the snapshot.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Check that the snapshot could have been produced by a store.
    pub fn validate(&self) -> Result<()> {
        if self.format_version > SNAPSHOT_FORMAT_VERSION {
            return Err(Error::InvalidSnapshot(format!(
                "unsupported snapshot format version: {} (max supported: {})",
                self.format_version, SNAPSHOT_FORMAT_VERSION
            )));
        }

        let mut seen = HashSet::with_capacity(self.products.len());
        for product in &self.products {
            if !seen.insert(product.sku.as_str()) {
                return Err(Error::InvalidSnapshot(format!(
                    "duplicate sku: {}",
                    product.sku
                )));
            }
        }

        Ok(())
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::InvalidSnapshot(e.to_string()))
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidSnapshot(e.to_string()))?;

        snapshot.validate()?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_empty_snapshot() {
        let snapshot = CatalogSnapshot::new();
        assert_eq!(snapshot.format_version, SNAPSHOT_FORMAT_VERSION);
        assert_eq!(snapshot.product_count(), 0);
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn add_product_appends() {
        let mut snapshot = CatalogSnapshot::new();
        snapshot.add_product(Product::new("sku-1", "title-1", "description-1", 10));

        assert_eq!(snapshot.product_count(), 1);
        assert_eq!(snapshot.products[0].title, "title-1");
    }

    #[test]
    fn json_roundtrip_keeps_order() {
        let mut snapshot = CatalogSnapshot::new();
        snapshot.add_product(Product::new("sku-b", "B", "second letter", 2));
        snapshot.add_product(Product::new("sku-a", "A", "first letter", 1));

        let json = snapshot.to_json_pretty().unwrap();
        let restored = CatalogSnapshot::from_json(&json).unwrap();

        assert_eq!(snapshot, restored);
        assert_eq!(restored.products[0].sku, "sku-b");
    }

    #[test]
    fn reject_duplicate_sku() {
        let mut snapshot = CatalogSnapshot::new();
        snapshot.add_product(Product::new("sku-1", "one", "", 1));
        snapshot.add_product(Product::new("sku-1", "again", "", 2));

        let result = snapshot.validate();
        assert!(matches!(result, Err(Error::InvalidSnapshot(_))));
    }

    #[test]
    fn reject_future_format_version() {
        let json = r#"{
            "formatVersion": 999,
            "products": []
        }"#;

        let result = CatalogSnapshot::from_json(json);
        assert!(matches!(result, Err(Error::InvalidSnapshot(_))));
    }

    #[test]
    fn reject_malformed_json() {
        let result = CatalogSnapshot::from_json("{\"formatVersion\": 1");
        assert!(matches!(result, Err(Error::InvalidSnapshot(_))));
    }
}
