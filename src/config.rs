//! Client configuration for the DigitalOcean API.

use std::time::Duration;

/// Fixed origin of the DigitalOcean public API.
pub const DEFAULT_BASE_URL: &str = "https://api.digitalocean.com";

/// Environment variable conventionally holding a personal access token.
pub const TOKEN_ENV_VAR: &str = "DIGITALOCEAN_TOKEN";

/// Transport settings consumed by [`HttpRequestAdapter`](crate::HttpRequestAdapter).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for requests. `None` lets [`ClientFactory`](crate::ClientFactory)
    /// fill in [`DEFAULT_BASE_URL`].
    pub base_url: Option<String>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration pointing at a custom base URL, e.g. a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(15),
            user_agent: format!("digitalocean-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
