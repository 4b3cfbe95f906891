//! Common test utilities for baselyn-client integration tests.
//!
//! Provides a scripted [`ApiTransport`] so client behavior can be driven
//! without the network, plus builders for upstream response bodies.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::json;

use baselyn_client::{ApiTransport, Error, HttpResponse, Result};

/// A scripted response for one URL pattern.
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Respond with this status code and body.
    Respond(u16, String),
    /// Fail at the transport level (connection refused, DNS, ...).
    Fail,
}

/// Transport that answers requests by first-match URL-substring rules and
/// records every URL it sees.
///
/// Unmatched requests fail at the transport level, so a test that forgets a
/// route degrades loudly instead of silently succeeding.
pub struct MockTransport {
    rules: Vec<(String, Scripted)>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Add a rule: any request whose URL contains `pattern` gets `response`.
    pub fn on(mut self, pattern: &str, response: Scripted) -> Self {
        self.rules.push((pattern.to_string(), response));
        self
    }

    /// Shorthand for a 200 rule.
    pub fn on_ok(self, pattern: &str, body: impl Into<String>) -> Self {
        self.on(pattern, Scripted::Respond(200, body.into()))
    }

    /// Every URL requested so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests().len()
    }
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn get(&self, url: Url) -> Result<HttpResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }
        for (pattern, scripted) in &self.rules {
            if url.as_str().contains(pattern) {
                return match scripted {
                    Scripted::Respond(status, body) => {
                        Ok(HttpResponse::with_status(*status, body.clone()))
                    }
                    Scripted::Fail => Err(Error::Transport(format!("scripted failure for {url}"))),
                };
            }
        }
        Err(Error::Transport(format!("no scripted response for {url}")))
    }
}

/// Build a catalog list body from entry values.
pub fn list_body(entries: &[serde_json::Value]) -> String {
    json!({ "data": entries }).to_string()
}

/// Build one fully-populated catalog entry.
pub fn catalog_entry(id: &str, name: &str, status: &str, low_date: &str, link: &str) -> serde_json::Value {
    json!({
        "feature_id": id,
        "name": name,
        "baseline": { "status": status, "low_date": low_date },
        "spec": { "links": [{ "link": link }] },
    })
}

/// Build a metadata body with a description.
pub fn metadata_body(description: &str) -> String {
    json!({ "description": description }).to_string()
}

/// The URL-substring pattern of one id's metadata endpoint.
pub fn metadata_pattern(id: &str) -> String {
    format!("/features/{id}/feature-metadata")
}

/// Convert a slice of literals into the owned id list the client takes.
pub fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}
