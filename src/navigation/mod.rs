//! Fluent navigation tree mirroring the API's URL hierarchy.
//!
//! Each node is a thin typed wrapper around [`RequestBuilder`], declared with
//! the `request_builder!` macro. Child accessors append a path segment; verb
//! methods build a [`RequestInformation`], send it through the adapter and
//! decode the response.

use std::sync::Arc;

use log::debug;
use reqwest::header::{HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::adapter::RequestAdapter;
use crate::errors::DoError;
use crate::request::{HttpMethod, HttpResponse, RequestInformation};

/// Declares a navigation node wrapping a [`RequestBuilder`].
macro_rules! request_builder {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            inner: $crate::navigation::RequestBuilder,
        }

        impl $name {
            pub(crate) fn new(inner: $crate::navigation::RequestBuilder) -> Self {
                Self { inner }
            }

            /// Retarget this node at an absolute URL, e.g. a `links.pages.next` value.
            pub fn with_url(&self, raw_url: impl Into<String>) -> Self {
                Self::new(self.inner.with_url(raw_url))
            }

            /// Path relative to the base URL.
            pub fn path(&self) -> String {
                self.inner.path()
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("path", &self.inner.path())
                    .finish()
            }
        }
    };
}

/// Child accessor appending a fixed segment.
macro_rules! child {
    ($(#[$meta:meta])* $method:ident, $segment:literal => $child:ty) => {
        $(#[$meta])*
        pub fn $method(&self) -> $child {
            <$child>::new(self.inner.segment($segment))
        }
    };
}

/// Child accessor appending a caller-supplied identifier.
macro_rules! item {
    ($(#[$meta:meta])* $method:ident($param:ident: $pty:ty) => $child:ty) => {
        $(#[$meta])*
        pub fn $method(&self, $param: $pty) -> $child {
            <$child>::new(self.inner.segment(&$param.to_string()))
        }
    };
}

pub mod account;
pub mod actions;
pub mod billing;
pub mod catalog;
pub mod databases;
pub mod domains;
pub mod droplets;
pub mod firewalls;
pub mod kubernetes;
pub mod monitoring;
pub mod projects;
pub mod query;
pub mod tags;
pub mod volumes;
pub mod vpcs;

pub use query::*;

/// Shared state behind every navigation node.
#[derive(Clone)]
pub struct RequestBuilder {
    adapter: Arc<dyn RequestAdapter>,
    segments: Vec<String>,
    raw_url: Option<String>,
}

impl RequestBuilder {
    pub(crate) fn root(adapter: Arc<dyn RequestAdapter>) -> Self {
        Self {
            adapter,
            segments: Vec::new(),
            raw_url: None,
        }
    }

    pub(crate) fn segment(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self {
            adapter: Arc::clone(&self.adapter),
            segments,
            raw_url: None,
        }
    }

    pub(crate) fn with_url(&self, raw_url: impl Into<String>) -> Self {
        Self {
            adapter: Arc::clone(&self.adapter),
            segments: self.segments.clone(),
            raw_url: Some(raw_url.into()),
        }
    }

    pub(crate) fn adapter(&self) -> &Arc<dyn RequestAdapter> {
        &self.adapter
    }

    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    fn request(&self, method: HttpMethod) -> RequestInformation {
        RequestInformation::new(method, self.segments.clone()).with_raw_url(self.raw_url.clone())
    }

    fn request_with<Q: QueryParameters + ?Sized>(
        &self,
        method: HttpMethod,
        query: &Q,
    ) -> RequestInformation {
        let mut request = self.request(method);
        for (key, value) in query.query_pairs() {
            request.add_query(key, value);
        }
        request
    }

    fn request_with_body<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        body: &B,
    ) -> Result<RequestInformation, DoError> {
        let mut request = self.request(method);
        request.set_json_body(body)?;
        Ok(request)
    }

    async fn execute(&self, request: RequestInformation) -> Result<HttpResponse, DoError> {
        let method = request.method;
        let path = request.path();
        let response = self.adapter.send(request).await?.error_for_status();
        if let Err(e) = &response {
            debug!("builder.execute method={} path={} error={}", method, path, e);
        }
        response
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        request: RequestInformation,
    ) -> Result<T, DoError> {
        let response = self.execute(request).await?;
        let parsed = response.json();
        if parsed.is_err() {
            debug!(
                "builder.execute_json decode_failed target_type={}",
                std::any::type_name::<T>()
            );
        }
        parsed
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self) -> Result<T, DoError> {
        self.execute_json(self.request(HttpMethod::Get)).await
    }

    pub(crate) async fn get_with<T, Q>(&self, query: &Q) -> Result<T, DoError>
    where
        T: DeserializeOwned,
        Q: QueryParameters + ?Sized,
    {
        self.execute_json(self.request_with(HttpMethod::Get, query))
            .await
    }

    /// GET returning the body untouched, for document downloads. `accept` is
    /// the media type of the document.
    pub(crate) async fn get_bytes(&self, accept: &'static str) -> Result<Vec<u8>, DoError> {
        let mut request = self.request(HttpMethod::Get);
        request
            .headers
            .insert(ACCEPT, HeaderValue::from_static(accept));
        let response = self.execute(request).await?;
        Ok(response.body)
    }

    pub(crate) async fn send_json<B, T>(&self, method: HttpMethod, body: &B) -> Result<T, DoError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute_json(self.request_with_body(method, body)?)
            .await
    }

    /// Send a JSON body to an endpoint that answers `204 No Content`.
    pub(crate) async fn send_no_content<B>(&self, method: HttpMethod, body: &B) -> Result<(), DoError>
    where
        B: Serialize + ?Sized,
    {
        self.execute(self.request_with_body(method, body)?).await?;
        Ok(())
    }

    pub(crate) async fn post<B, T>(&self, body: &B) -> Result<T, DoError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(HttpMethod::Post, body).await
    }

    pub(crate) async fn post_with<B, T, Q>(&self, body: &B, query: &Q) -> Result<T, DoError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
        Q: QueryParameters + ?Sized,
    {
        let mut request = self.request_with(HttpMethod::Post, query);
        request.set_json_body(body)?;
        self.execute_json(request).await
    }

    pub(crate) async fn put<B, T>(&self, body: &B) -> Result<T, DoError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(HttpMethod::Put, body).await
    }

    pub(crate) async fn patch<B, T>(&self, body: &B) -> Result<T, DoError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(HttpMethod::Patch, body).await
    }

    pub(crate) async fn delete(&self) -> Result<(), DoError> {
        self.execute(self.request(HttpMethod::Delete)).await?;
        Ok(())
    }

    pub(crate) async fn delete_with<Q: QueryParameters + ?Sized>(
        &self,
        query: &Q,
    ) -> Result<(), DoError> {
        self.execute(self.request_with(HttpMethod::Delete, query))
            .await?;
        Ok(())
    }
}

request_builder!(
    /// `/v2`, the root of the DigitalOcean API.
    V2RequestBuilder
);

impl V2RequestBuilder {
    child!(account, "account" => account::AccountRequestBuilder);
    child!(actions, "actions" => actions::ActionsRequestBuilder);
    child!(customers, "customers" => billing::CustomersRequestBuilder);
    child!(databases, "databases" => databases::DatabasesRequestBuilder);
    child!(domains, "domains" => domains::DomainsRequestBuilder);
    child!(droplets, "droplets" => droplets::DropletsRequestBuilder);
    child!(firewalls, "firewalls" => firewalls::FirewallsRequestBuilder);
    child!(images, "images" => catalog::ImagesRequestBuilder);
    child!(kubernetes, "kubernetes" => kubernetes::KubernetesRequestBuilder);
    child!(monitoring, "monitoring" => monitoring::MonitoringRequestBuilder);
    child!(projects, "projects" => projects::ProjectsRequestBuilder);
    child!(regions, "regions" => catalog::RegionsRequestBuilder);
    child!(sizes, "sizes" => catalog::SizesRequestBuilder);
    child!(tags, "tags" => tags::TagsRequestBuilder);
    child!(volumes, "volumes" => volumes::VolumesRequestBuilder);
    child!(vpcs, "vpcs" => vpcs::VpcsRequestBuilder);
}
