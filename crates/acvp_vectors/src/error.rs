//! Error types for the vector fetcher.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VectorError {
    #[error("Network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("Malformed test vector document: {0}")]
    MalformedInput(String),

    #[error("Local vector file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl VectorError {
    pub(crate) fn network(url: &str, reason: impl std::fmt::Display) -> Self {
        VectorError::Network {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VectorError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for VectorError {
    fn from(e: serde_json::Error) -> Self {
        VectorError::MalformedInput(e.to_string())
    }
}
