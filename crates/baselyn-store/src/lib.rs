//! # baselyn-store
//!
//! User-state persistence for the Baselyn dashboard.
//!
//! The dashboard keeps exactly two pieces of user state: the starred feature
//! ids and the user-added ("custom") feature ids. Both are JSON string
//! arrays stored through a narrow key-value port, so no other crate ever
//! depends on a concrete storage medium:
//!
//! - [`KeyValueStore`]: the injected port (`get`/`set` on string cells)
//! - [`MemoryStore`]: ephemeral backend for tests and one-shot runs
//! - [`FileStore`]: single-JSON-file backend for the CLI
//! - [`StarredIds`] / [`CustomIds`]: the two lists, with their fixed keys

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod kv;
pub mod lists;

pub use error::{Error, Result};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use lists::{CustomIds, IdList, StarredIds, CUSTOM_IDS_KEY, STARRED_IDS_KEY};
