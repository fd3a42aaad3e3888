//! Store - the authoritative product collection.
//!
//! [`ProductStore`] is the seam the catalog service talks to. [`InMemoryStore`]
//! is the in-process implementation: an insertion-ordered map guarded by a
//! single lock, so every check-then-write happens in one critical section.

use crate::{error::Result, CatalogSnapshot, Error, Product, ProductPatch, Sku};
use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Atomic primitives over a SKU-keyed, insertion-ordered product collection.
///
/// Implementations must make each call atomic with respect to every other
/// call: `create` can never insert a SKU that a concurrent `create` also
/// inserted, and readers never observe a half-applied update.
pub trait ProductStore: Send + Sync {
    /// Insert a product whose SKU is not yet present.
    ///
    /// Fails with [`Error::Conflict`] and leaves the store untouched if the SKU
    /// already exists.
    fn create(&self, product: Product) -> Result<Product>;

    /// Fetch the product stored under `sku`.
    fn get(&self, sku: &str) -> Result<Product>;

    /// Merge `patch` into the product stored under `sku` and return the result.
    fn update(&self, sku: &str, patch: ProductPatch) -> Result<Product>;

    /// Remove the product stored under `sku`, returning it.
    fn delete(&self, sku: &str) -> Result<Product>;

    /// Snapshot of every product in insertion order.
    fn list(&self) -> Result<Vec<Product>>;

    /// Number of stored products.
    fn len(&self) -> Result<usize>;

    /// Check if the store holds no products.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// Products keyed by insertion sequence, plus a SKU index into that sequence.
///
/// Sequence numbers only ever grow, so iterating `products` yields insertion
/// order and removing an entry leaves the rest in place.
#[derive(Debug, Default)]
struct Catalog {
    index: HashMap<Sku, u64>,
    products: BTreeMap<u64, Product>,
    next_seq: u64,
}

impl Catalog {
    fn create(&mut self, product: Product) -> Result<Product> {
        if self.index.contains_key(&product.sku) {
            return Err(Error::Conflict(product.sku));
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(product.sku.clone(), seq);
        self.products.insert(seq, product.clone());

        Ok(product)
    }

    fn get(&self, sku: &str) -> Result<&Product> {
        self.index
            .get(sku)
            .and_then(|seq| self.products.get(seq))
            .ok_or_else(|| Error::NotFound(sku.to_string()))
    }

    fn update(&mut self, sku: &str, patch: ProductPatch) -> Result<Product> {
        let product = self
            .index
            .get(sku)
            .and_then(|seq| self.products.get_mut(seq))
            .ok_or_else(|| Error::NotFound(sku.to_string()))?;

        product.apply_patch(patch);
        Ok(product.clone())
    }

    fn delete(&mut self, sku: &str) -> Result<Product> {
        let seq = self
            .index
            .remove(sku)
            .ok_or_else(|| Error::NotFound(sku.to_string()))?;

        self.products
            .remove(&seq)
            .ok_or_else(|| Error::NotFound(sku.to_string()))
    }

    fn ordered(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

/// In-memory product store.
///
/// Thread-safe; share it behind an `Arc` or hand it to a
/// [`CatalogService`](crate::CatalogService) which owns it.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    catalog: RwLock<Catalog>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated from a snapshot.
    ///
    /// The snapshot is validated first, so a document with repeated SKUs is
    /// rejected instead of silently dropping records.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Result<Self> {
        let store = Self::new();
        store.import_state(snapshot)?;
        Ok(store)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Catalog>> {
        self.catalog.read().map_err(|_| Error::StoreUnavailable)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Catalog>> {
        self.catalog.write().map_err(|_| Error::StoreUnavailable)
    }

    /// Export the current contents as a snapshot, in insertion order.
    pub fn export_state(&self) -> Result<CatalogSnapshot> {
        let catalog = self.read()?;
        let mut snapshot = CatalogSnapshot::new();
        for product in catalog.ordered() {
            snapshot.add_product(product.clone());
        }
        Ok(snapshot)
    }

    /// Replace the current contents with those of `snapshot`.
    pub fn import_state(&self, snapshot: CatalogSnapshot) -> Result<()> {
        snapshot.validate()?;

        let mut fresh = Catalog::default();
        for product in snapshot.products {
            fresh.create(product)?;
        }

        *self.write()? = fresh;
        Ok(())
    }
}

impl ProductStore for InMemoryStore {
    fn create(&self, product: Product) -> Result<Product> {
        self.write()?.create(product)
    }

    fn get(&self, sku: &str) -> Result<Product> {
        self.read()?.get(sku).cloned()
    }

    fn update(&self, sku: &str, patch: ProductPatch) -> Result<Product> {
        self.write()?.update(sku, patch)
    }

    fn delete(&self, sku: &str) -> Result<Product> {
        self.write()?.delete(sku)
    }

    fn list(&self) -> Result<Vec<Product>> {
        Ok(self.read()?.ordered().cloned().collect())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.read()?.products.len())
    }
}
