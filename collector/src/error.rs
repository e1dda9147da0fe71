//! Collector Errors

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for collector operations
pub type CollectResult<T> = Result<T, CollectError>;

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("HTTP error fetching {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },
    #[error("Feed {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("Malformed feed: {0}")]
    Feed(#[from] roxmltree::Error),
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}
