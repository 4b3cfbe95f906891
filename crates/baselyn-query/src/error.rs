//! Error types for baselyn-query.

use thiserror::Error;

/// Result type alias for baselyn-query operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in baselyn-query
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A string did not name a known sort order.
    #[error("unknown sort order: {0:?} (expected newest, oldest, az, or za)")]
    UnknownSortOrder(String),

    /// A string did not name a known favorites filter.
    #[error("unknown favorites filter: {0:?} (expected all or starred)")]
    UnknownFavoritesFilter(String),
}
