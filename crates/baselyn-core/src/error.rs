//! Error types for baselyn-core.

use thiserror::Error;

/// Result type alias for baselyn-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in baselyn-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A string did not name a known category.
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    /// A string did not name a known baseline status.
    #[error("unknown baseline status: {0:?}")]
    UnknownStatus(String),
}
