use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::http::{ReqwestTransport, Transport};

/// Canny API client.
///
/// Generic over the [`Transport`] implementation so tests can run the same
/// dispatch logic against a canned double. Every remote operation is a thin
/// wrapper around [`request`](Self::request): the per-resource methods live
/// in the `api` modules.
pub struct CannyClient<T: Transport = ReqwestTransport> {
    http: T,
    config: Arc<ApiConfig>,
}

impl CannyClient<ReqwestTransport> {
    /// Creates a client configured from the environment, talking to the
    /// hosted API via reqwest.
    pub fn new() -> Self {
        Self::with_config(Arc::new(ApiConfig::from_env()))
    }

    /// Creates a client with an explicit configuration handle.
    pub fn with_config(config: Arc<ApiConfig>) -> Self {
        Self {
            http: ReqwestTransport::new(),
            config,
        }
    }
}

impl Default for CannyClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> CannyClient<T> {
    /// Creates a client with a custom transport implementation.
    pub fn with_transport(config: Arc<ApiConfig>, http: T) -> Self {
        Self { http, config }
    }

    /// The configuration this client reads on every dispatch.
    pub fn config(&self) -> &Arc<ApiConfig> {
        &self.config
    }

    /// Dispatches one API operation: serializes `payload`, injects the
    /// `apiKey` field (overwriting any caller-supplied value), resolves the
    /// absolute URL as `origin + path`, and hands the request to the
    /// transport. No retries, no timeouts, no caching.
    ///
    /// `payload` must serialize to a JSON object; endpoints without
    /// parameters pass `&()`, which becomes an object holding only the key.
    pub(crate) async fn request<R, P>(&self, path: &str, payload: &P) -> Result<R>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let mut body = match serde_json::to_value(payload) {
            Ok(Value::Object(map)) => map,
            Ok(Value::Null) => Map::new(),
            Ok(other) => {
                return Err(Error::Transport(anyhow::anyhow!(
                    "request payload must serialize to a JSON object, got {other}"
                )));
            }
            Err(err) => return Err(Error::Transport(err.into())),
        };
        body.insert("apiKey".to_string(), Value::String(self.config.key()));

        let url = format!("{}{}", self.config.origin(), path);
        tracing::debug!(path, "dispatching API request");

        match self.http.send(&url, &Value::Object(body)).await {
            Ok(raw) => serde_json::from_value(raw).map_err(Error::BadPayload),
            Err(err) => {
                if let Error::BadResponse(response) = &err {
                    tracing::warn!(path, status = response.status, "API request rejected");
                }
                Err(err)
            }
        }
    }

    /// Dispatch for operations whose response is the literal `"success"`
    /// string; the body is still required to be valid JSON.
    pub(crate) async fn request_unit<P>(&self, path: &str, payload: &P) -> Result<()>
    where
        P: Serialize + ?Sized,
    {
        self.request::<Value, P>(path, payload).await.map(|_| ())
    }
}

impl<T: Transport + Clone> Clone for CannyClient<T> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            config: self.config.clone(),
        }
    }
}
