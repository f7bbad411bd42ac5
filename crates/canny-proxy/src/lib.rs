//! Forwarding reverse proxy for the Canny API.
//!
//! Strips a configured path prefix from inbound requests and forwards the
//! body to `{origin}{rest}` as a JSON POST, relaying the upstream response
//! verbatim. The only logic added on top of forwarding is CORS preflight
//! handling, so browser clients can talk to the API through a same-origin
//! path.

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::{HeaderMap, HeaderName, HeaderValue};
use axum::http::{Method, StatusCode, Uri};
use axum::response::Response;
use axum::Router;
use canny_api::ApiConfig;
use tokio::net::TcpListener;

/// Options controlling where requests are accepted and forwarded.
#[derive(Debug, Clone, Default)]
pub struct ProxyOptions {
    /// Path prefix the proxy answers under. Requests outside it get a 404.
    /// `None` forwards every path.
    pub api_path: Option<String>,
    /// Upstream origin. Falls back to the shared [`ApiConfig`] origin.
    pub origin: Option<String>,
}

#[derive(Clone)]
struct ProxyState {
    options: Arc<ProxyOptions>,
    config: Arc<ApiConfig>,
    client: reqwest::Client,
}

/// Headers that describe the inbound hop rather than the request itself.
const HOP_BY_HOP: &[HeaderName] = &[
    axum::http::header::HOST,
    axum::http::header::CONNECTION,
    axum::http::header::CONTENT_LENGTH,
    axum::http::header::TRANSFER_ENCODING,
    axum::http::header::UPGRADE,
    axum::http::header::TE,
    axum::http::header::TRAILER,
];

/// Builds the proxy router. Every path is handled by the same forwarding
/// handler; routing decisions are prefix checks, not route tables.
pub fn app(options: ProxyOptions, config: Arc<ApiConfig>) -> Router {
    let state = ProxyState {
        options: Arc::new(options),
        config,
        client: reqwest::Client::new(),
    };
    Router::new().fallback(forward).with_state(state)
}

/// Serves the proxy on the given listener until the task is cancelled.
pub async fn run(
    listener: TcpListener,
    options: ProxyOptions,
    config: Arc<ApiConfig>,
) -> std::io::Result<()> {
    axum::serve(listener, app(options, config)).await
}

async fn forward(
    State(state): State<ProxyState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return preflight_response();
    }

    let path = uri.path();
    let rest = match &state.options.api_path {
        Some(prefix) => match path.strip_prefix(prefix.as_str()) {
            Some(rest) => rest,
            None => return plain_response(StatusCode::NOT_FOUND, "Not Found"),
        },
        None => path,
    };

    let origin = state
        .options
        .origin
        .clone()
        .unwrap_or_else(|| state.config.origin());
    let upstream_url = format!("{origin}{rest}");
    tracing::debug!(%upstream_url, "forwarding request");

    let mut forwarded_headers = HeaderMap::new();
    for (name, value) in &headers {
        if !HOP_BY_HOP.contains(name) {
            forwarded_headers.insert(name.clone(), value.clone());
        }
    }

    // Every remote operation is a POST; the inbound method is not relayed.
    let upstream = state
        .client
        .post(&upstream_url)
        .headers(forwarded_headers)
        .body(body)
        .send()
        .await;

    match upstream {
        Ok(upstream_response) => {
            let status = upstream_response.status();
            let response_headers = upstream_response.headers().clone();

            let bytes = match upstream_response.bytes().await {
                Ok(bytes) => bytes,
                Err(err) => {
                    tracing::error!(error = %err, "upstream body read failed");
                    return plain_response(StatusCode::BAD_GATEWAY, "upstream request failed");
                }
            };

            let mut response = Response::new(Body::from(bytes));
            *response.status_mut() = status;
            for (name, value) in &response_headers {
                if !HOP_BY_HOP.contains(name) {
                    response.headers_mut().insert(name.clone(), value.clone());
                }
            }
            allow_any_origin(response.headers_mut());
            response
        }
        Err(err) => {
            tracing::error!(error = %err, %upstream_url, "upstream request failed");
            plain_response(StatusCode::BAD_GATEWAY, "upstream request failed")
        }
    }
}

/// Answers a CORS preflight locally with permissive headers.
fn preflight_response() -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::NO_CONTENT;
    let headers = response.headers_mut();
    allow_any_origin(headers);
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("content-type, authorization"),
    );
    response
}

fn allow_any_origin(headers: &mut HeaderMap) {
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
}

fn plain_response(status: StatusCode, message: &'static str) -> Response {
    let mut response = Response::new(Body::from(message));
    *response.status_mut() = status;
    allow_any_origin(response.headers_mut());
    response
}
