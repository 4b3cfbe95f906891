//! HTTP transport port.
//!
//! The client never talks to the network directly; it issues GET requests
//! through [`ApiTransport`]. The default implementation wraps a shared
//! [`reqwest::Client`]; tests substitute a scripted transport.
//!
//! The port is deliberately narrow: the upstream API is read-only, so a
//! single `get` returning status + body text covers everything the client
//! needs, and keeps mock implementations trivial.

use async_trait::async_trait;
use reqwest::Url;

use crate::error::Result;

/// A plain HTTP response: status code and body text.
///
/// Body decoding is left to the caller so that transport implementations
/// stay agnostic of the upstream payload schema.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Create a 200 response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// Create a response with an explicit status code.
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstract read-only HTTP transport.
///
/// Implementations must be cheap to share (`Send + Sync`); the client holds
/// one behind an `Arc` and issues many concurrent `get`s against it.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Issue a GET request and return the response, however unsuccessful.
    ///
    /// Implementations return `Err` only for transport-level failures
    /// (connection refused, timeout, invalid URL); a non-2xx HTTP status is
    /// a successful `HttpResponse`, classified by the caller.
    async fn get(&self, url: Url) -> Result<HttpResponse>;
}

/// Production transport over [`reqwest::Client`].
///
/// Uses reqwest's defaults throughout; in particular no extra timeout is
/// configured, matching the no-retry/no-timeout posture of the client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a fresh connection pool.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ApiTransport for ReqwestTransport {
    async fn get(&self, url: Url) -> Result<HttpResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

// ============================================================================
// Tests
// ============================================================================
