//! # baselyn-client
//!
//! Client for the webstatus.dev feature API.
//!
//! This crate turns a set of opaque feature identifiers into normalized
//! [`baselyn_core::FeatureRecord`]s, isolating callers from the upstream
//! schema, partial outages, and query/URL-size limits:
//!
//! - Identifiers are fetched in concurrent batches of 40 (one catalog list
//!   request plus one metadata request per id, all in flight together).
//! - Every requested id yields exactly one record, in input order. Upstream
//!   failure degrades a record to a visible fallback; it is never dropped,
//!   and no error crosses the public surface.
//! - HTTP access goes through the [`ApiTransport`] port, so tests drive the
//!   client with scripted responses instead of the network.
//!
//! # Example
//!
//! ```rust,ignore
//! use baselyn_client::WebStatusClient;
//!
//! let client = WebStatusClient::new();
//! let records = client.fetch_features(&ids).await;
//! for record in &records {
//!     println!("{}: {}", record.id, record.status);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod transport;
mod wire;

pub use client::{WebStatusClient, API_BASE, DEFAULT_BATCH_SIZE};
pub use error::{Error, Result};
pub use transport::{ApiTransport, HttpResponse, ReqwestTransport};
