//! Common test utilities for integration tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use canny_api::{ApiConfig, CannyClient, Error, HttpResponse, Result, Transport};
use serde_json::Value;

pub const TEST_ORIGIN: &str = "https://canny.example/api/v1";
pub const TEST_KEY: &str = "test-api-key";

/// Recording transport with canned responses, for driving the client
/// end-to-end without a network.
#[derive(Debug, Clone, Default)]
pub struct StubTransport {
    responses: Arc<RwLock<HashMap<String, (u16, String)>>>,
    requests: Arc<RwLock<Vec<(String, Value)>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_post(self, url: &str, status: u16, body: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(url.to_string(), (status, body.into()));
        self
    }

    /// Recorded `(url, payload)` pairs, in dispatch order.
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, url: &str, payload: &Value) -> Result<Value> {
        self.requests
            .write()
            .unwrap()
            .push((url.to_string(), payload.clone()));

        let responses = self.responses.read().unwrap();
        let (status, body) = responses
            .get(url)
            .ok_or_else(|| Error::Transport(anyhow::anyhow!("no stub response for URL: {url}")))?;

        if !(200..300).contains(status) {
            return Err(Error::BadResponse(HttpResponse {
                status: *status,
                status_text: String::new(),
                body: body.clone(),
            }));
        }

        serde_json::from_str(body).map_err(Error::BadPayload)
    }
}

/// A client wired to `TEST_ORIGIN`/`TEST_KEY` over the given stub.
pub fn test_client(stub: StubTransport) -> CannyClient<StubTransport> {
    let config = Arc::new(ApiConfig::default());
    config.set_origin(TEST_ORIGIN);
    config.set_key(TEST_KEY);
    CannyClient::with_transport(config, stub)
}

/// A minimal board object in wire format.
pub fn board_json(id: &str) -> Value {
    serde_json::json!({
        "id": id,
        "created": "2024-01-01T00:00:00.000Z",
        "isPrivate": false,
        "name": "Feature Requests",
        "postCount": 7,
        "privateComments": false,
        "url": format!("https://your-company.canny.io/admin/board/{id}")
    })
}

/// A minimal user object in wire format.
pub fn user_json(id: &str, name: &str) -> Value {
    serde_json::json!({
        "id": id,
        "avatarURL": null,
        "created": "2024-01-01T00:00:00.000Z",
        "customFields": {},
        "email": format!("{name}@example.test"),
        "isAdmin": false,
        "lastActivity": "2024-02-01T00:00:00.000Z",
        "name": name,
        "url": format!("https://your-company.canny.io/admin/users/{id}"),
        "userID": null
    })
}

/// A minimal post object in wire format.
pub fn post_json(id: &str, title: &str) -> Value {
    serde_json::json!({
        "id": id,
        "author": user_json("u1", "ada"),
        "board": board_json("b1"),
        "by": null,
        "category": null,
        "commentCount": 0,
        "created": "2024-01-05T00:00:00.000Z",
        "details": "Longer description",
        "eta": null,
        "imageURLs": [],
        "score": 11,
        "status": "open",
        "statusChangedAt": "2024-01-05T00:00:00.000Z",
        "tags": [],
        "title": title,
        "url": format!("https://your-company.canny.io/admin/board/b1/p/{id}")
    })
}
