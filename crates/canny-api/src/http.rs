//! HTTP transport abstraction.
//!
//! The [`Transport`] trait is the single seam between the dispatcher and a
//! concrete networking stack, so the same client logic runs against reqwest
//! in production and a canned double in tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Error, Result};

/// A transport performs one JSON-over-HTTP POST exchange.
///
/// Implementations must classify every outcome into the error taxonomy and
/// never panic across this boundary:
///
/// - the call never completed → [`Error::Transport`]
/// - non-2xx status → [`Error::BadResponse`]
/// - 2xx but the body is not valid JSON → [`Error::BadPayload`]
/// - 2xx with a parseable body → `Ok`
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `payload` as a JSON POST body to `url` and returns the parsed
    /// response document.
    async fn send(&self, url: &str, payload: &Value) -> Result<Value>;
}

/// A completed HTTP exchange as plain data, kept inside
/// [`Error::BadResponse`] so callers can inspect what the server said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    /// Returns true if status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Production transport backed by a pooled [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, url: &str, payload: &Value) -> Result<Value> {
        let response = self
            .inner
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|err| Error::Transport(err.into()))?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();

        // Reading the body can still fail mid-stream; that is a transport
        // failure, not a payload one.
        let body = response
            .text()
            .await
            .map_err(|err| Error::Transport(err.into()))?;

        if !status.is_success() {
            return Err(Error::BadResponse(HttpResponse {
                status: status.as_u16(),
                status_text,
                body,
            }));
        }

        serde_json::from_str(&body).map_err(Error::BadPayload)
    }
}
