//! Instance size extraction from a downloaded catalog document.
//!
//! One fixed traversal: for every product record, read
//! `attributes.instanceType`. Products without it are counted and skipped;
//! at catalog scale (tens of thousands of SKUs for a major compute service)
//! a sizeable fraction of records describe offerings with no instance
//! dimension at all.
//!
//! The contract takes a document path, not a parsed tree, so the single
//! in-memory parse here can later be swapped for a streaming one without
//! touching callers.

use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{Catalog, Extraction};

/// Attribute holding a product's instance size identifier.
const SIZE_ATTRIBUTE: &str = "instanceType";

/// Extract every product's instance size identifier from the catalog at
/// `path`, in catalog iteration order (unspecified; callers must sort).
pub fn extract_size_types(path: &Path) -> Result<Extraction> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog document: {}", path.display()))?;
    let catalog: Catalog = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse catalog document: {}", path.display()))?;

    let mut size_types = Vec::new();
    let mut gaps = 0u64;

    for product in catalog.products.values() {
        match product.attributes.get(SIZE_ATTRIBUTE).and_then(|v| v.as_str()) {
            Some(size) => size_types.push(size.to_string()),
            None => gaps += 1,
        }
    }

    Ok(Extraction { size_types, gaps })
}
