//! Client construction: the factory that binds an adapter to the API origin,
//! and the client handle that roots the navigation tree.

use std::sync::Arc;

use log::debug;

use crate::adapter::{HttpRequestAdapter, RequestAdapter};
use crate::auth::BearerTokenProvider;
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::errors::DoError;
use crate::navigation::{RequestBuilder, V2RequestBuilder};

/// Builds [`DigitalOceanClient`]s from request adapters.
pub struct ClientFactory;

impl ClientFactory {
    /// Bind `adapter` to the DigitalOcean API and return the client root.
    ///
    /// An adapter whose base URL is unset or empty is pointed at
    /// [`DEFAULT_BASE_URL`]. A base URL that is already set is kept, which is
    /// how tests aim the client at a mock server.
    pub fn create<A: RequestAdapter + 'static>(mut adapter: A) -> DigitalOceanClient {
        let unset = adapter.base_url().map_or(true, |url| url.trim().is_empty());
        if unset {
            adapter.set_base_url(DEFAULT_BASE_URL.to_string());
        }
        debug!(
            "factory.create base_url={}",
            adapter.base_url().unwrap_or_default()
        );
        DigitalOceanClient {
            root: RequestBuilder::root(Arc::new(adapter)),
        }
    }
}

/// Handle on the DigitalOcean API. Cheap to clone; clones share the adapter.
#[derive(Clone)]
pub struct DigitalOceanClient {
    root: RequestBuilder,
}

impl DigitalOceanClient {
    /// Client authenticated with a personal access token, using default
    /// transport settings.
    pub fn from_token(token: impl Into<String>) -> Result<Self, DoError> {
        Self::with_config(token, &ClientConfig::default())
    }

    /// Client authenticated with the token in `DIGITALOCEAN_TOKEN`.
    pub fn from_env() -> Result<Self, DoError> {
        let auth = BearerTokenProvider::from_env()?;
        let adapter = HttpRequestAdapter::new(auth)?;
        Ok(ClientFactory::create(adapter))
    }

    pub fn with_config(token: impl Into<String>, config: &ClientConfig) -> Result<Self, DoError> {
        let auth = BearerTokenProvider::new(token)?;
        let adapter = HttpRequestAdapter::with_config(auth, config)?;
        Ok(ClientFactory::create(adapter))
    }

    /// Root of the navigation tree: `/v2`.
    pub fn v2(&self) -> V2RequestBuilder {
        V2RequestBuilder::new(self.root.segment("v2"))
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> Option<String> {
        self.root.adapter().base_url().map(str::to_string)
    }
}

impl std::fmt::Debug for DigitalOceanClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigitalOceanClient")
            .field("base_url", &self.base_url())
            .finish()
    }
}
