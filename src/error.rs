//! Typed failure taxonomy for the refresh pipeline.
//!
//! Everything here is fatal to a run: the caller logs the message and exits
//! non-zero. Products missing the target attribute are not errors; the
//! extractor counts them and moves on.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RefreshError {
    /// The service name matched no key in the offer index. A typo or an
    /// index schema change; retrying will not help.
    #[error("service '{0}' has no entry in the offer index")]
    ServiceNotFound(String),

    /// The configured region is absent from the service's region index.
    #[error("region '{0}' has no entry in the current-version index")]
    RegionNotFound(String),

    /// A URL in the index chain could not be parsed or joined.
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Network or HTTP-level failure. Propagated as-is, no internal retry.
    #[error("request for {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The download reported success but no file materialized.
    #[error("download of {url} left no file at {path}")]
    IncompleteDownload { url: String, path: PathBuf },

    /// The final artifact could not be written.
    #[error("could not write artifact {path}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RefreshError {
    pub(crate) fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }
}
