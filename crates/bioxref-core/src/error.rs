//! Load-path error types.

use thiserror::Error;

/// Why a db-xrefs document could not be loaded.
///
/// Transport failures are carried as strings so that this crate stays
/// independent of any particular HTTP client.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request never produced a response (DNS, connect, TLS, read).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {status} fetching {url}")]
    Status { status: u16, url: String },

    /// The response body was not a well-formed db-xrefs document.
    #[error("malformed db-xrefs document: {0}")]
    Parse(#[from] serde_json::Error),
}
