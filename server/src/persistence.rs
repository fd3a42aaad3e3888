//! Catalog persistence via JSON snapshot files.

use std::path::Path;

use catalog_engine::{CatalogSnapshot, InMemoryStore};

use crate::error::Result;

/// Load a store from the snapshot at `path`.
///
/// A missing file yields an empty store, so a fresh deployment starts clean.
pub async fn load_store(path: &Path) -> Result<InMemoryStore> {
    if !tokio::fs::try_exists(path).await? {
        tracing::info!("No snapshot at {}, starting with an empty catalog", path.display());
        return Ok(InMemoryStore::new());
    }

    let json = tokio::fs::read_to_string(path).await?;
    let snapshot = CatalogSnapshot::from_json(&json)?;
    let count = snapshot.product_count();
    let store = InMemoryStore::from_snapshot(snapshot)?;

    tracing::info!("Loaded {} products from {}", count, path.display());
    Ok(store)
}

/// Write the store's contents to `path`.
///
/// The snapshot is written to a sibling temp file first and renamed into
/// place, so a crash mid-write never leaves a truncated snapshot behind.
pub async fn save_store(store: &InMemoryStore, path: &Path) -> Result<()> {
    let snapshot = store.export_state()?;
    let json = snapshot.to_json_pretty()?;

    let tmp = path.with_extension("tmp");
    tokio::fs::write(&tmp, json).await?;
    tokio::fs::rename(&tmp, path).await?;

    tracing::info!(
        "Saved {} products to {}",
        snapshot.product_count(),
        path.display()
    );
    Ok(())
}
