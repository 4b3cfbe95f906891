//! The feature data client.
//!
//! [`WebStatusClient`] is the one stateful-looking (but state-free) object
//! in Baselyn: it holds a transport handle and a batch size, and exposes two
//! total operations. See the crate docs for the degradation contract.

use std::sync::Arc;

use futures::future;
use reqwest::Url;

use baselyn_core::{Category, FeatureRecord};

use crate::error::{Error, Result};
use crate::transport::{ApiTransport, HttpResponse, ReqwestTransport};
use crate::wire::{ListResponse, ListedFeature, MetadataResponse};

/// Base URL of the public webstatus.dev API.
pub const API_BASE: &str = "https://api.webstatus.dev/v1";

/// Identifiers per batch: one list request plus this many metadata requests.
///
/// Sized to keep the OR-combined list query well under upstream URL limits.
pub const DEFAULT_BATCH_SIZE: usize = 40;

/// Client for the webstatus.dev feature API.
///
/// Holds no per-call state: repeated calls against an unchanged upstream
/// produce structurally identical results.
pub struct WebStatusClient {
    transport: Arc<dyn ApiTransport>,
    batch_size: usize,
}

impl WebStatusClient {
    /// Create a client over the production reqwest transport.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new()))
    }

    /// Create a client over a caller-provided transport.
    pub fn with_transport(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            transport,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Override the batch size (minimum 1). Intended for tests that need to
    /// observe batch boundaries without 40+ identifiers.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Fetch normalized records for every id, in input order.
    ///
    /// Total: never fails and never drops an id. Callers are expected to
    /// deduplicate `ids` first (duplicates are fetched and returned
    /// duplicated). Empty input returns empty output without touching the
    /// transport.
    ///
    /// Identifiers are processed in batches of [`DEFAULT_BATCH_SIZE`]; all
    /// batches run concurrently, and each batch degrades independently: a
    /// failure in one batch never affects another batch's records.
    pub async fn fetch_features(&self, ids: &[String]) -> Vec<FeatureRecord> {
        if ids.is_empty() {
            return Vec::new();
        }

        let batches = ids.chunks(self.batch_size).map(|batch| self.fetch_batch(batch));
        let results = future::join_all(batches).await;
        results.into_iter().flatten().collect()
    }

    /// Fetch a single feature. Convenience wrapper over [`Self::fetch_features`].
    pub async fn fetch_feature(&self, id: &str) -> FeatureRecord {
        let mut records = self.fetch_features(&[id.to_string()]).await;
        records
            .pop()
            .unwrap_or_else(|| FeatureRecord::fallback(id))
    }

    /// Fetch one batch, absorbing every failure into fallback records.
    async fn fetch_batch(&self, ids: &[String]) -> Vec<FeatureRecord> {
        match self.try_fetch_batch(ids).await {
            Ok(records) => records,
            Err(error) => {
                tracing::warn!(%error, batch_len = ids.len(), "batch fetch failed, substituting fallbacks");
                ids.iter()
                    .map(|id| FeatureRecord::fallback(id.as_str()))
                    .collect()
            }
        }
    }

    /// Fetch one batch: the catalog list request and all per-id metadata
    /// requests are issued together and awaited together.
    async fn try_fetch_batch(&self, ids: &[String]) -> Result<Vec<FeatureRecord>> {
        tracing::debug!(batch_len = ids.len(), "fetching feature batch");

        let list_url = self.list_url(ids)?;
        let list_future = self.transport.get(list_url);
        let metadata_future = future::join_all(ids.iter().map(|id| self.fetch_description(id)));

        let (list_response, descriptions) = tokio::join!(list_future, metadata_future);
        let listed = parse_list_response(list_response?)?;

        let records = ids
            .iter()
            .zip(descriptions)
            .map(|(id, description)| match listed.iter().find(|f| f.feature_id == *id) {
                Some(feature) => normalize(id, feature, description),
                None => {
                    tracing::warn!(%id, "feature missing from catalog response");
                    FeatureRecord::fallback(id.as_str())
                }
            })
            .collect();

        Ok(records)
    }

    /// Fetch the free-text description for one id.
    ///
    /// Any failure (transport, status, or parse) resolves to `None`; a
    /// missing description never degrades the rest of its record.
    async fn fetch_description(&self, id: &str) -> Option<String> {
        let url = Url::parse(&format!("{API_BASE}/features/{id}/feature-metadata")).ok()?;
        match self.transport.get(url).await {
            Ok(response) if response.is_success() => {
                match serde_json::from_str::<MetadataResponse>(&response.body) {
                    Ok(metadata) => metadata.description.filter(|d| !d.is_empty()),
                    Err(error) => {
                        tracing::debug!(id, %error, "metadata parse failed");
                        None
                    }
                }
            }
            Ok(response) => {
                tracing::debug!(id, status = response.status, "metadata request unsuccessful");
                None
            }
            Err(error) => {
                tracing::debug!(id, %error, "metadata request failed");
                None
            }
        }
    }

    /// Build the OR-combined catalog query for a batch.
    ///
    /// `page_size` is twice the batch length as a defensive over-fetch
    /// against duplicate or extra catalog entries.
    fn list_url(&self, ids: &[String]) -> Result<Url> {
        let query = ids
            .iter()
            .map(|id| format!("id:{id}"))
            .collect::<Vec<_>>()
            .join(" OR ");
        let page_size = (ids.len() * 2).to_string();

        Url::parse_with_params(
            &format!("{API_BASE}/features"),
            &[("q", query.as_str()), ("page_size", page_size.as_str())],
        )
        .map_err(|e| Error::Url(e.to_string()))
    }
}

impl Default for WebStatusClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract catalog entries from the list response.
///
/// A non-success status is normalized to an empty catalog page (every id in
/// the batch will miss and fall back individually); a malformed body is a
/// batch-level error.
fn parse_list_response(response: HttpResponse) -> Result<Vec<ListedFeature>> {
    if !response.is_success() {
        tracing::warn!(status = response.status, "feature list request unsuccessful");
        return Ok(Vec::new());
    }
    let parsed: ListResponse = serde_json::from_str(&response.body)?;
    Ok(parsed.data)
}

/// Normalize one catalog entry into a display-ready record.
fn normalize(id: &str, feature: &ListedFeature, description: Option<String>) -> FeatureRecord {
    let name = feature
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(id)
        .to_string();

    let baseline = feature.baseline.as_ref();
    let status = baseline.and_then(|b| b.status).unwrap_or_default();
    let date = baseline
        .and_then(|b| b.low_date.as_deref())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| status.sentinel_date())
        .to_string();

    let category = match feature.spec.as_ref().and_then(|s| s.links.as_ref()) {
        Some(links) => Category::from_links(links.iter().map(|l| l.link.as_str())),
        None => Category::WebPlatform,
    };

    FeatureRecord {
        id: id.to_string(),
        name,
        description: description.unwrap_or_default(),
        category,
        status,
        date,
    }
}

// ============================================================================
// Tests
// ============================================================================
