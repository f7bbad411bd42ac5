//! API origin and credential configuration.
//!
//! Resolution order for both values: explicit override (via the setters) →
//! environment variable (read once at construction) → hardcoded default.

use std::sync::RwLock;

/// Default base URL for the hosted Canny API.
pub const DEFAULT_API_ORIGIN: &str = "https://canny.io/api/v1";

/// Environment variable overriding the API origin.
pub const ORIGIN_ENV_VAR: &str = "CANNY_API_ORIGIN";

/// Environment variable providing the API key.
pub const KEY_ENV_VAR: &str = "CANNY_API_KEY";

/// Shared configuration for API requests: the origin that relative paths are
/// appended to, and the `apiKey` credential injected into every payload.
///
/// The client holds this behind an `Arc`, so origin and key can be changed
/// at any time and take effect on the next dispatch. An empty key is valid
/// at this layer; the remote service rejects unauthenticated requests with
/// a non-2xx status.
#[derive(Debug)]
pub struct ApiConfig {
    origin: RwLock<String>,
    key: RwLock<String>,
}

impl ApiConfig {
    /// Creates a configuration seeded from the environment, falling back to
    /// [`DEFAULT_API_ORIGIN`] and an empty key.
    pub fn from_env() -> Self {
        let origin =
            std::env::var(ORIGIN_ENV_VAR).unwrap_or_else(|_| DEFAULT_API_ORIGIN.to_string());
        let key = std::env::var(KEY_ENV_VAR).unwrap_or_default();

        Self {
            origin: RwLock::new(origin),
            key: RwLock::new(key),
        }
    }

    /// Returns the currently effective API origin.
    pub fn origin(&self) -> String {
        self.origin.read().unwrap().clone()
    }

    /// Replaces the API origin and returns the new effective value.
    pub fn set_origin(&self, origin: impl Into<String>) -> String {
        let origin = origin.into();
        *self.origin.write().unwrap() = origin.clone();
        origin
    }

    /// Returns the currently effective API key. Empty if none was provided.
    pub fn key(&self) -> String {
        self.key.read().unwrap().clone()
    }

    /// Replaces the API key and returns the new effective value.
    pub fn set_key(&self, key: impl Into<String>) -> String {
        let key = key.into();
        *self.key.write().unwrap() = key.clone();
        key
    }
}

/// A configuration that ignores the environment: the hardcoded origin and an
/// empty key. Useful for hermetic tests.
impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: RwLock::new(DEFAULT_API_ORIGIN.to_string()),
            key: RwLock::new(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_origin_is_hosted_api() {
        let config = ApiConfig::default();
        assert_eq!(config.origin(), "https://canny.io/api/v1");
    }

    #[test]
    fn default_key_is_empty() {
        let config = ApiConfig::default();
        assert_eq!(config.key(), "");
    }

    #[test]
    fn set_origin_returns_new_effective_value() {
        let config = ApiConfig::default();
        let effective = config.set_origin("https://example.test");
        assert_eq!(effective, "https://example.test");
        assert_eq!(config.origin(), "https://example.test");
    }

    #[test]
    fn set_key_replaces_previous_value() {
        let config = ApiConfig::default();
        config.set_key("first");
        config.set_key("second");
        assert_eq!(config.key(), "second");
    }

    #[test]
    fn reads_are_idempotent_without_intervening_setters() {
        let config = ApiConfig::default();
        config.set_origin("https://example.test");
        assert_eq!(config.origin(), config.origin());
        assert_eq!(config.key(), config.key());
    }
}
