//! Error types for baselyn-store.

use thiserror::Error;

/// Result type alias for baselyn-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in baselyn-store
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error while opening a file-backed store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store file contents were not a JSON string-to-string object
    #[error("Corrupt store file: {0}")]
    Corrupt(#[from] serde_json::Error),
}
