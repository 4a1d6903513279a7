//! Failure taxonomy for fetching a single key. Every kind halts the batch.

use crate::keys::Key;
use std::path::PathBuf;

/// Why fetching one resource failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// libcurl reported a transport error (DNS, connect, TLS, read).
    #[error("network error")]
    Network(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {status}")]
    Http { status: u32 },
    /// Body was not valid JSON, or the value tree could not be re-encoded.
    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),
    /// Writing the local artifact failed.
    #[error("write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid URL")]
    Url(#[from] url::ParseError),
}

impl FetchError {
    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Http { .. } => "http",
            FetchError::Json(_) => "json",
            FetchError::Io { .. } => "io",
            FetchError::Url(_) => "url",
        }
    }
}

/// A failure tagged with the key it happened on.
#[derive(Debug, thiserror::Error)]
#[error("key {key}")]
pub struct KeyFailure {
    pub key: Key,
    #[source]
    pub error: FetchError,
}
