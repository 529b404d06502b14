//! Refresh pipeline orchestration.
//!
//! Coordinates the full refresh flow: freshness gate → index resolution →
//! catalog download → extraction → normalization → artifact write → column
//! display. Every stage completes before the next starts; there are no
//! overlapping requests and no shared state between invocations.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::{artifact, display, extract, fetcher, freshness, normalize, resolver};

pub async fn run_refresh(config: &Config, force: bool) -> Result<()> {
    let artifact_path = &config.cache.artifact_path;

    if freshness::is_fresh(artifact_path, config.cache.max_age_days, force) {
        let age = freshness::artifact_age_days(artifact_path).unwrap_or(0);
        let name = artifact_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| artifact_path.display().to_string());
        println!(
            "{} age of {} days is under the {} day refresh window, skipping refresh",
            name, age, config.cache.max_age_days
        );
        return Ok(());
    }

    std::fs::create_dir_all(&config.cache.scratch_dir).with_context(|| {
        format!(
            "Failed to create scratch directory: {}",
            config.cache.scratch_dir.display()
        )
    })?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.service.timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    // Keep a raw copy of the offer index in scratch for inspection; an
    // existing copy is reused without a download.
    let index_path = fetcher::fetch_document(
        &client,
        &config.service.index_url,
        &config.cache.scratch_dir,
        false,
    )
    .await?;

    let resolved = resolver::resolve_catalog_url(&client, &config.service).await?;

    // The catalog frequently shares the index's filename, so it is always
    // fetched with overwrite on.
    let catalog_path = fetcher::fetch_document(
        &client,
        &resolved.url,
        &config.cache.scratch_dir,
        true,
    )
    .await?;

    let extraction = extract::extract_size_types(&catalog_path)?;
    let size_types = normalize::normalize(extraction.size_types);
    artifact::write_artifact(artifact_path, &size_types)?;

    println!("refresh {}", config.service.name);
    println!("  offer index: {}", index_path.display());
    println!("  catalog url: {}", resolved.url);
    println!(
        "  resolved at: {}",
        resolved.resolved_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  products without a size type: {}", extraction.gaps);
    println!("  size types: {}", size_types.len());
    println!("  artifact: {}", artifact_path.display());
    display::print_columns(&size_types, config.display.columns);
    println!("ok");

    Ok(())
}
