//! Outbound HTTP transport.
//!
//! # Responsibilities
//! - Issue exactly one HTTP request per call (method, URL, body, headers)
//! - Return the raw response parts, or a transport error
//!
//! # Design Decisions
//! - No retries, no explicit timeouts beyond the HTTP stack's defaults
//! - Status codes are not interpreted here; a non-2xx response is still `Ok`
//! - Supplied headers are set verbatim, with no defaulting or merging
//! - The body is read to completion before returning, so callers hold plain
//!   bytes and mock transports need no streaming machinery

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use thiserror::Error;
use url::Url;

/// Failure before a usable response existed.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Request construction or connection-level failure (DNS, refused,
    /// stack-default timeout).
    #[error("request failed: {0}")]
    Request(String),

    /// The response arrived but its body could not be read to completion.
    #[error("body read failed: {0}")]
    Body(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_body() || err.is_decode() {
            TransportError::Body(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

/// A fully-read upstream response.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Issues a single outbound HTTP request.
///
/// Implementations are stateless and safe for concurrent in-flight calls.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Bytes>,
        headers: HeaderMap,
    ) -> Result<UpstreamResponse, TransportError>;
}

/// Transport backed by a shared `reqwest` client.
pub struct RestClient {
    client: reqwest::Client,
}

impl RestClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for RestClient {
    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Bytes>,
        headers: HeaderMap,
    ) -> Result<UpstreamResponse, TransportError> {
        let mut request = self.client.request(method, url).headers(headers);
        if let Some(bytes) = body {
            request = request.body(bytes);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|err| TransportError::Body(err.to_string()))?;

        Ok(UpstreamResponse {
            status,
            headers,
            body,
        })
    }
}
