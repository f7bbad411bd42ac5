//! Typed async client for the [Canny](https://canny.io) feedback-management
//! API: boards, posts, comments, votes, tags, categories, users, companies,
//! opportunities, changelog entries, and status changes.
//!
//! Every remote operation is a JSON POST to `{origin}{path}` with the
//! `apiKey` credential injected into the payload; every outcome comes back
//! as a `Result` classifying failures into network, HTTP, and payload
//! errors; nothing is thrown across the dispatch boundary.
//!
//! ```no_run
//! use canny_api::{ApiConfig, CannyClient};
//! use std::sync::Arc;
//!
//! # async fn example() -> canny_api::Result<()> {
//! let config = Arc::new(ApiConfig::from_env());
//! config.set_key("your-api-key");
//!
//! let client = CannyClient::with_config(config);
//! let boards = client.list_all_boards().await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use api::*;
pub use client::CannyClient;
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use http::{HttpResponse, ReqwestTransport, Transport};
pub use types::*;
