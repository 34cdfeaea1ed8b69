//! Error types for the DigitalOcean SDK.
//!
//! Non-2xx responses become [`DoError::Api`], which keeps the status code and
//! the response body bytes exactly as the server sent them.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// The primary error type for the SDK.
#[derive(Error, Debug)]
pub enum DoError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    Api(ApiError),

    // Transport errors
    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON error: {0}")]
    JsonError(String),

    // Caller-side waiting
    #[error("Timed out: {0}")]
    Timeout(String),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// A non-2xx response from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    /// Response body as text. Invalid UTF-8 is replaced with U+FFFD; see
    /// [`raw_body`](Self::raw_body) for the exact bytes.
    pub body: String,
    /// Response body bytes, unmodified.
    pub raw_body: Vec<u8>,
    /// Error identifier from the DigitalOcean envelope, e.g. `not_found`.
    pub id: Option<String>,
    pub message: Option<String>,
    pub request_id: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    id: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

impl ApiError {
    /// Build an error from a status and body, picking up the standard
    /// `{"id", "message", "request_id"}` envelope when the body has one.
    pub fn from_response(status: u16, body: String) -> Self {
        Self::from_bytes(status, body.into_bytes())
    }

    /// Like [`from_response`](Self::from_response), for a body that may not be UTF-8.
    pub fn from_bytes(status: u16, raw_body: Vec<u8>) -> Self {
        let envelope = serde_json::from_slice::<ErrorEnvelope>(&raw_body).ok();
        let (id, message, request_id) = match envelope {
            Some(e) => (e.id, e.message, e.request_id),
            None => (None, None, None),
        };
        Self {
            status,
            body: String::from_utf8_lossy(&raw_body).into_owned(),
            raw_body,
            id,
            message,
            request_id,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.id, &self.message) {
            (Some(id), Some(message)) => write!(f, "HTTP {} ({}): {}", self.status, id, message),
            (None, Some(message)) => write!(f, "HTTP {}: {}", self.status, message),
            _ => write!(f, "HTTP {}: {}", self.status, self.body),
        }
    }
}

impl DoError {
    /// HTTP status code if this is an API error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DoError::Api(e) => Some(e.status),
            _ => None,
        }
    }

    /// Response body text if this is an API error. See [`response_bytes`](Self::response_bytes)
    /// for bodies that are not UTF-8.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            DoError::Api(e) => Some(e.body.as_str()),
            _ => None,
        }
    }

    /// Response body bytes if this is an API error.
    pub fn response_bytes(&self) -> Option<&[u8]> {
        match self {
            DoError::Api(e) => Some(e.raw_body.as_slice()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Returns true if this error suggests retrying with backoff.
    pub fn is_retryable(&self) -> bool {
        match self {
            DoError::Api(e) => e.status == 429 || e.status >= 500,
            DoError::HttpError(_) => true,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for DoError {
    fn from(err: reqwest::Error) -> Self {
        DoError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for DoError {
    fn from(err: serde_json::Error) -> Self {
        DoError::JsonError(err.to_string())
    }
}

impl From<url::ParseError> for DoError {
    fn from(err: url::ParseError) -> Self {
        DoError::Configuration(format!("URL parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_digitalocean_error_envelope() {
        let body = r#"{"id":"not_found","message":"The resource you were accessing could not be found.","request_id":"abc-123"}"#;
        let err = ApiError::from_response(404, body.to_string());
        assert_eq!(err.status, 404);
        assert_eq!(err.body, body);
        assert_eq!(err.id.as_deref(), Some("not_found"));
        assert_eq!(err.request_id.as_deref(), Some("abc-123"));
        assert_eq!(
            err.to_string(),
            "HTTP 404 (not_found): The resource you were accessing could not be found."
        );
    }

    #[test]
    fn keeps_non_json_body_verbatim() {
        let err = ApiError::from_response(502, "<html>bad gateway</html>".into());
        assert!(err.id.is_none());
        assert_eq!(err.to_string(), "HTTP 502: <html>bad gateway</html>");
    }

    #[test]
    fn keeps_non_utf8_body_bytes() {
        let err = DoError::Api(ApiError::from_bytes(500, vec![0xff, 0x41]));
        assert_eq!(err.response_bytes(), Some(&[0xff, 0x41][..]));
        assert_eq!(err.response_body(), Some("\u{fffd}A"));
    }

    #[test]
    fn retryable_statuses() {
        let rate_limited = DoError::Api(ApiError::from_response(429, String::new()));
        let unprocessable = DoError::Api(ApiError::from_response(422, String::new()));
        assert!(rate_limited.is_retryable());
        assert!(!unprocessable.is_retryable());
        assert!(!DoError::Configuration("x".into()).is_retryable());
    }
}
