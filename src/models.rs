//! Core data models used throughout offer-sync.
//!
//! These types mirror the three remote JSON documents the pipeline walks
//! (global offer index, per-service region index, concrete catalog) plus the
//! intermediate values that flow between stages.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Top-level offer index: one entry per cloud service.
///
/// Keys are kept in a `BTreeMap` so candidate lookups iterate in sorted
/// order and substring matching is deterministic.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferIndex {
    pub offers: BTreeMap<String, OfferListing>,
}

/// Per-service descriptor inside the offer index.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferListing {
    /// Relative URL of this service's current region index document.
    pub current_region_index_url: String,
}

/// Per-service region index: region name to current catalog location.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionIndex {
    pub regions: HashMap<String, RegionListing>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionListing {
    /// Relative URL of the current catalog document for this region.
    pub current_version_url: String,
}

/// Concrete price catalog: SKU to product record.
///
/// Catalogs for a major compute service run to tens of thousands of
/// products; the whole document is parsed once and held as a single
/// in-memory representation.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: HashMap<String, Product>,
}

/// A single product record. A product may legitimately lack the attribute
/// the extractor is after; that is an expected gap, not corruption.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
}

/// Result of resolving a service name through the index chain.
#[derive(Debug, Clone)]
pub struct ResolvedCatalog {
    /// Fully qualified URL of the current catalog document.
    pub url: String,
    pub resolved_at: DateTime<Utc>,
}

/// Raw extractor output: attribute values in catalog iteration order plus
/// the number of products that had no value.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub size_types: Vec<String>,
    pub gaps: u64,
}
