//! # baselyn-query
//!
//! Pure client-side processing of feature records: the filter model the
//! dashboard controls bind to, the sort orders, and category grouping.
//! No I/O anywhere in this crate; everything operates on in-memory
//! [`baselyn_core::FeatureRecord`]s.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod filter;
pub mod group;

pub use error::{Error, Result};
pub use filter::{apply, FavoritesFilter, FeatureFilters, SortOrder};
pub use group::group_by_category;
