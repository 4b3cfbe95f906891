//! # baselyn-core
//!
//! Core types for the Baselyn dashboard data layer.
//!
//! This crate is dependency level 0: every other Baselyn crate builds on the
//! types defined here, and nothing here performs I/O.
//!
//! - [`FeatureRecord`]: the normalized, display-ready feature value object
//! - [`BaselineStatus`]: cross-browser availability maturity
//! - [`Category`]: coarse feature category plus the spec-link classifier
//! - [`util`]: id-set utilities shared by the client and CLI

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod category;
pub mod error;
pub mod feature;
pub mod util;

pub use category::Category;
pub use error::{Error, Result};
pub use feature::{BaselineStatus, FeatureRecord, EPOCH_DATE, FAR_FUTURE_DATE};

// Convenience re-exports from util
pub use util::ids::{merge_id_sets, normalize_id, unique_sorted};
