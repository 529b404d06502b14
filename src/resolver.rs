//! Service name to catalog URL resolution.
//!
//! Walks the two-level remote index: the global offer index maps service
//! keys to a per-service region index, which in turn points at the current
//! catalog document for each region. Three remote reads per cold resolution
//! including the caller's own catalog fetch.
//!
//! Key matching is substring containment: a key matches when it contains the
//! uppercase or titlecase form of the queried name (`ec2` → `AmazonEC2`).
//! Keys are scanned in sorted order so overlapping candidates resolve to the
//! same key on every run. Substring matching can still select a shorter key
//! that prefixes a longer one (`s3` lands on `AmazonS3`, never
//! `AmazonS3GlacierDeepArchive`); callers wanting the longer key must spell
//! more of its name.

use chrono::Utc;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::config::ServiceConfig;
use crate::error::RefreshError;
use crate::models::{OfferIndex, RegionIndex, ResolvedCatalog};

/// Resolve the configured service's current catalog URL.
pub async fn resolve_catalog_url(
    client: &Client,
    service: &ServiceConfig,
) -> Result<ResolvedCatalog, RefreshError> {
    let index: OfferIndex = get_json(client, &service.index_url).await?;

    let key = match_offer_key(&service.name, index.offers.keys())
        .ok_or_else(|| RefreshError::ServiceNotFound(service.name.clone()))?;
    let listing = &index.offers[&key];

    let region_index_url = join_url(&service.index_url, &listing.current_region_index_url)?;
    let regions: RegionIndex = get_json(client, region_index_url.as_str()).await?;

    let region = regions
        .regions
        .get(&service.region)
        .ok_or_else(|| RefreshError::RegionNotFound(service.region.clone()))?;
    let catalog_url = join_url(&service.index_url, &region.current_version_url)?;

    Ok(ResolvedCatalog {
        url: catalog_url.to_string(),
        resolved_at: Utc::now(),
    })
}

/// First offer key (in iteration order) containing the uppercase or
/// titlecase form of `service`.
fn match_offer_key<'a>(
    service: &str,
    keys: impl Iterator<Item = &'a String>,
) -> Option<String> {
    let upper = service.to_uppercase();
    let title = titlecase(service);
    for key in keys {
        if key.contains(&upper) || key.contains(&title) {
            return Some(key.clone());
        }
    }
    None
}

/// First character uppercased, the rest lowercased (`route53` → `Route53`).
fn titlecase(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Join a possibly-relative URL from an index document against the index
/// URL's origin.
fn join_url(base: &str, candidate: &str) -> Result<Url, RefreshError> {
    if let Ok(url) = Url::parse(candidate) {
        return Ok(url);
    }
    let base = Url::parse(base).map_err(|e| RefreshError::InvalidUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })?;
    base.join(candidate).map_err(|e| RefreshError::InvalidUrl {
        url: candidate.to_string(),
        reason: e.to_string(),
    })
}

async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, RefreshError> {
    client
        .get(url)
        .send()
        .await
        .map_err(|e| RefreshError::transport(url, e))?
        .error_for_status()
        .map_err(|e| RefreshError::transport(url, e))?
        .json::<T>()
        .await
        .map_err(|e| RefreshError::transport(url, e))
}
