//! Error taxonomy for API calls.
//!
//! Every outcome of a dispatch is one of three failure kinds or success.
//! Nothing panics across the transport boundary; callers always receive a
//! `Result` value.

use thiserror::Error;

use crate::http::HttpResponse;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The three failure kinds an API call can resolve to.
#[derive(Debug, Error)]
pub enum Error {
    /// The network call itself never completed (DNS failure, connection
    /// refused, timeout, aborted). Wraps the underlying cause opaquely.
    #[error("failed to fetch")]
    Transport(#[source] anyhow::Error),

    /// The server responded, but with a non-2xx status. The full response
    /// is kept for inspection.
    #[error("[{}] - {}", .0.status, .0.status_text)]
    BadResponse(HttpResponse),

    /// The server responded 2xx, but the body was not the JSON the
    /// operation's contract promised.
    #[error("invalid JSON body")]
    BadPayload(#[source] serde_json::Error),
}

impl Error {
    /// HTTP status code of the rejected response, if this is `BadResponse`.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::BadResponse(response) => Some(response.status),
            _ => None,
        }
    }
}
