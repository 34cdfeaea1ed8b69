//! Request adapters: the transport seam between the navigation tree and HTTP.
//!
//! An adapter owns the base URL and the authentication provider. The tree
//! builds a [`RequestInformation`], the adapter authenticates and sends it,
//! and the tree maps the returned [`HttpResponse`] onto a model.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::auth::AuthenticationProvider;
use crate::config::ClientConfig;
use crate::errors::DoError;
use crate::request::{HttpResponse, RequestInformation};

/// Executes requests on behalf of the navigation tree.
#[async_trait]
pub trait RequestAdapter: Send + Sync {
    /// Base URL requests are resolved against, if one has been set.
    fn base_url(&self) -> Option<&str>;

    fn set_base_url(&mut self, base_url: String);

    /// Authenticate and send `request`, returning the raw response whatever
    /// its status.
    async fn send(&self, request: RequestInformation) -> Result<HttpResponse, DoError>;
}

/// reqwest-backed adapter.
pub struct HttpRequestAdapter {
    client: Client,
    base_url: Option<String>,
    auth: Arc<dyn AuthenticationProvider>,
}

impl HttpRequestAdapter {
    /// Create an adapter with default transport settings and no base URL.
    pub fn new(auth: impl AuthenticationProvider + 'static) -> Result<Self, DoError> {
        Self::with_config(auth, &ClientConfig::default())
    }

    /// Create an adapter from explicit transport settings.
    pub fn with_config(
        auth: impl AuthenticationProvider + 'static,
        config: &ClientConfig,
    ) -> Result<Self, DoError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            auth: Arc::new(auth),
        })
    }

    /// Wrap a preconfigured reqwest client.
    pub fn with_client(auth: impl AuthenticationProvider + 'static, client: Client) -> Self {
        Self {
            client,
            base_url: None,
            auth: Arc::new(auth),
        }
    }
}

#[async_trait]
impl RequestAdapter for HttpRequestAdapter {
    fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn set_base_url(&mut self, base_url: String) {
        self.base_url = Some(base_url);
    }

    async fn send(&self, mut request: RequestInformation) -> Result<HttpResponse, DoError> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or_else(|| DoError::Configuration("request adapter has no base URL".into()))?;
        // resolved before authenticating: uri() rejects foreign origins
        let url = request.uri(base_url)?;
        self.auth.authenticate_request(&mut request);
        debug!(
            "adapter.send method={} url={} body_len={}",
            request.method,
            url,
            request.body.as_ref().map_or(0, Vec::len)
        );

        let mut builder = self
            .client
            .request(request.method.into(), url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        debug!("adapter.send status={} body_len={}", status, body.len());

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
