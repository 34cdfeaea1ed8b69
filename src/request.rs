//! Per-call request context and the raw response handed back by adapters.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::errors::{ApiError, DoError};

/// HTTP verbs used by the navigation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A request on its way to an adapter.
///
/// The target is either a list of path segments resolved against the
/// adapter's base URL, or a raw absolute URL (pagination links).
#[derive(Debug, Clone)]
pub struct RequestInformation {
    pub method: HttpMethod,
    pub path_segments: Vec<String>,
    pub raw_url: Option<String>,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl RequestInformation {
    pub fn new(method: HttpMethod, path_segments: Vec<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            method,
            path_segments,
            raw_url: None,
            query: Vec::new(),
            headers,
            body: None,
        }
    }

    /// Target an absolute URL instead of the path segments.
    pub fn with_raw_url(mut self, raw_url: Option<String>) -> Self {
        self.raw_url = raw_url;
        self
    }

    pub fn add_query(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Serialize `body` as JSON and set the content type.
    pub fn set_json_body<B: Serialize + ?Sized>(&mut self, body: &B) -> Result<(), DoError> {
        self.body = Some(serde_json::to_vec(body)?);
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(())
    }

    /// Path relative to the base URL, e.g. `/v2/droplets/42`.
    pub fn path(&self) -> String {
        format!("/{}", self.path_segments.join("/"))
    }

    /// Resolve the absolute URL against `base_url`.
    ///
    /// Path segments are percent-encoded individually, so a segment can never
    /// introduce extra path components. A raw URL must share the base URL's
    /// scheme, host and port; credentials are never sent to another origin.
    pub fn uri(&self, base_url: &str) -> Result<Url, DoError> {
        let mut url = match &self.raw_url {
            Some(raw) => {
                let url = Url::parse(raw)?;
                let base = Url::parse(base_url)?;
                if url.origin() != base.origin() {
                    return Err(DoError::Configuration(format!(
                        "URL {} is outside the API origin {}",
                        url.origin().ascii_serialization(),
                        base.origin().ascii_serialization()
                    )));
                }
                url
            }
            None => {
                let mut url = Url::parse(base_url)?;
                url.path_segments_mut()
                    .map_err(|_| {
                        DoError::Configuration(format!("base URL cannot carry a path: {base_url}"))
                    })?
                    .pop_if_empty()
                    .extend(&self.path_segments);
                url
            }
        };
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

/// Raw response returned by a [`RequestAdapter`](crate::RequestAdapter).
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns true if the status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Map non-2xx responses to [`DoError::Api`].
    pub fn error_for_status(self) -> Result<Self, DoError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(DoError::Api(ApiError::from_bytes(self.status, self.body)))
        }
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, DoError> {
        serde_json::from_slice(&self.body).map_err(|e| {
            let text = self.text();
            DoError::JsonError(format!(
                "Failed to parse response: {e}\nBody: {}",
                text.chars().take(500).collect::<String>()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_segments_against_base() {
        let req = RequestInformation::new(HttpMethod::Get, segments(&["v2", "droplets", "42"]));
        let url = req.uri("https://api.digitalocean.com").unwrap();
        assert_eq!(url.as_str(), "https://api.digitalocean.com/v2/droplets/42");
        assert_eq!(req.path(), "/v2/droplets/42");
    }

    #[test]
    fn keeps_base_path_prefix() {
        let req = RequestInformation::new(HttpMethod::Get, segments(&["v2", "account"]));
        let url = req.uri("http://127.0.0.1:8080/proxy/").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/proxy/v2/account");
    }

    #[test]
    fn encodes_each_segment() {
        let req = RequestInformation::new(HttpMethod::Get, segments(&["v2", "tags", "a/b c"]));
        let url = req.uri("https://api.digitalocean.com").unwrap();
        assert_eq!(url.path(), "/v2/tags/a%2Fb%20c");
    }

    #[test]
    fn appends_query_pairs_only_when_present() {
        let mut req = RequestInformation::new(HttpMethod::Get, segments(&["v2", "droplets"]));
        let bare = req.uri("https://api.digitalocean.com").unwrap();
        assert_eq!(bare.query(), None);

        req.add_query("page", "2");
        req.add_query("tag_name", "web");
        let url = req.uri("https://api.digitalocean.com").unwrap();
        assert_eq!(url.query(), Some("page=2&tag_name=web"));
    }

    #[test]
    fn raw_url_overrides_segments() {
        let req = RequestInformation::new(HttpMethod::Get, segments(&["v2", "droplets"]))
            .with_raw_url(Some("https://api.digitalocean.com/v2/droplets?page=3".into()));
        let url = req.uri("https://api.digitalocean.com").unwrap();
        assert_eq!(url.as_str(), "https://api.digitalocean.com/v2/droplets?page=3");
    }

    #[test]
    fn raw_url_must_share_base_origin() {
        let base = "https://api.digitalocean.com";
        for foreign in [
            "https://evil.example/v2/droplets?page=2",
            "http://api.digitalocean.com/v2/droplets?page=2",
            "https://api.digitalocean.com:8443/v2/droplets?page=2",
        ] {
            let req = RequestInformation::new(HttpMethod::Get, segments(&["v2", "droplets"]))
                .with_raw_url(Some(foreign.into()));
            assert!(
                matches!(req.uri(base), Err(DoError::Configuration(_))),
                "{foreign} was accepted"
            );
        }

        // explicit default port is the same origin
        let req = RequestInformation::new(HttpMethod::Get, segments(&["v2", "droplets"]))
            .with_raw_url(Some("https://api.digitalocean.com:443/v2/droplets?page=2".into()));
        assert!(req.uri(base).is_ok());
    }

    #[test]
    fn non_success_maps_to_api_error() {
        let resp = HttpResponse {
            status: 422,
            headers: HeaderMap::new(),
            body: br#"{"id":"unprocessable_entity","message":"Name is invalid"}"#.to_vec(),
        };
        let err = resp.error_for_status().unwrap_err();
        assert_eq!(err.status_code(), Some(422));
        assert_eq!(
            err.response_body(),
            Some(r#"{"id":"unprocessable_entity","message":"Name is invalid"}"#)
        );
    }
}
