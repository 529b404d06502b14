//! Remote document retrieval into the scratch directory.
//!
//! Documents land under the scratch directory named by the final path
//! segment of their URL. With `overwrite` off an existing file short-circuits
//! the download entirely (zero network); with it on the stale copy is removed
//! and the document fetched unconditionally. Different services publishing
//! the same filename collide in scratch, a known limitation of the layout,
//! handled by fetching the catalog with `overwrite` on.

use std::path::{Path, PathBuf};

use reqwest::{Client, Url};

use crate::error::RefreshError;

/// Download `url` into `scratch_dir`, returning the local path.
///
/// No retries: transport failures propagate and the caller decides whether
/// the run is over.
pub async fn fetch_document(
    client: &Client,
    url: &str,
    scratch_dir: &Path,
    overwrite: bool,
) -> Result<PathBuf, RefreshError> {
    let path = local_document_path(url, scratch_dir)?;

    if path.exists() {
        if overwrite {
            std::fs::remove_file(&path)?;
        } else {
            return Ok(path);
        }
    }

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| RefreshError::transport(url, e))?
        .error_for_status()
        .map_err(|e| RefreshError::transport(url, e))?;
    let body = response
        .bytes()
        .await
        .map_err(|e| RefreshError::transport(url, e))?;

    std::fs::write(&path, &body)?;

    // Guard against a write that reported success without materializing
    // anything (full disk, scratch dir removed mid-run).
    if !path.exists() {
        return Err(RefreshError::IncompleteDownload {
            url: url.to_string(),
            path,
        });
    }

    Ok(path)
}

/// Scratch path for a URL: last path segment joined under `scratch_dir`.
pub fn local_document_path(url: &str, scratch_dir: &Path) -> Result<PathBuf, RefreshError> {
    let parsed = Url::parse(url).map_err(|e| RefreshError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    let filename = parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| RefreshError::InvalidUrl {
            url: url.to_string(),
            reason: "no filename in url path".to_string(),
        })?;
    Ok(scratch_dir.join(filename))
}
