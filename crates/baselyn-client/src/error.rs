//! Error types for baselyn-client.
//!
//! These errors are internal plumbing: the public fetch operations are
//! total and absorb every variant into fallback records before returning.

use thiserror::Error;

/// Result type alias for baselyn-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in baselyn-client
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Request URL could not be constructed
    #[error("Invalid request URL: {0}")]
    Url(String),

    /// Transport-level failure from a non-HTTP transport
    #[error("Transport error: {0}")]
    Transport(String),
}
