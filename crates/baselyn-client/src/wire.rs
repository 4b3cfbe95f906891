//! Upstream payload schema.
//!
//! Deserialize-only mirrors of the webstatus.dev responses the client
//! consumes. Every field beyond `feature_id` is optional and unknown fields
//! are ignored, so upstream schema growth cannot break parsing.

use serde::Deserialize;

use baselyn_core::BaselineStatus;

/// Body of `GET /features?q=...`.
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse {
    #[serde(default)]
    pub data: Vec<ListedFeature>,
}

/// One catalog entry from the list response.
#[derive(Debug, Deserialize)]
pub(crate) struct ListedFeature {
    pub feature_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub baseline: Option<BaselineField>,
    #[serde(default)]
    pub spec: Option<SpecField>,
}

/// Baseline block of a catalog entry.
#[derive(Debug, Deserialize)]
pub(crate) struct BaselineField {
    #[serde(default)]
    pub status: Option<BaselineStatus>,
    #[serde(default)]
    pub low_date: Option<String>,
}

/// Specification block of a catalog entry.
#[derive(Debug, Deserialize)]
pub(crate) struct SpecField {
    #[serde(default)]
    pub links: Option<Vec<SpecLink>>,
}

/// A single specification link.
#[derive(Debug, Deserialize)]
pub(crate) struct SpecLink {
    #[serde(default)]
    pub link: String,
}

/// Body of `GET /features/{id}/feature-metadata`.
#[derive(Debug, Deserialize)]
pub(crate) struct MetadataResponse {
    #[serde(default)]
    pub description: Option<String>,
}
