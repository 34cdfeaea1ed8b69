//! Authentication providers.
//!
//! An [`AuthenticationProvider`] decorates each outgoing request before the
//! adapter hands it to transport. The DigitalOcean API only accepts bearer
//! tokens, so [`BearerTokenProvider`] is the one used in practice.

use std::fmt;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};

use crate::config::TOKEN_ENV_VAR;
use crate::errors::DoError;
use crate::request::RequestInformation;

/// Supplies credentials to outgoing requests.
pub trait AuthenticationProvider: Send + Sync {
    /// Decorate `request` with credentials. Called once per request.
    fn authenticate_request(&self, request: &mut RequestInformation);
}

/// Bearer token authentication with a personal access token.
pub struct BearerTokenProvider {
    token: SecretString,
    header: HeaderValue,
}

impl BearerTokenProvider {
    /// Create a provider for `token`.
    ///
    /// Fails if the token is blank or contains bytes that cannot be sent in an
    /// HTTP header.
    pub fn new(token: impl Into<String>) -> Result<Self, DoError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(DoError::Configuration("API token must not be empty".into()));
        }
        let mut header = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            DoError::Configuration("API token contains characters not allowed in a header".into())
        })?;
        header.set_sensitive(true);
        Ok(Self {
            token: SecretString::new(token),
            header,
        })
    }

    /// Read the token from `DIGITALOCEAN_TOKEN`.
    pub fn from_env() -> Result<Self, DoError> {
        Self::from_env_var(TOKEN_ENV_VAR)
    }

    /// Read the token from the named environment variable.
    pub fn from_env_var(name: &str) -> Result<Self, DoError> {
        let token = std::env::var(name)
            .map_err(|_| DoError::Configuration(format!("{name} is not set")))?;
        Self::new(token)
    }

    /// Last four characters of the token, for telling tokens apart in output.
    pub fn token_hint(&self) -> String {
        let token = self.token.expose_secret();
        let chars: Vec<char> = token.chars().collect();
        if chars.len() > 8 {
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("...{tail}")
        } else {
            "****".to_string()
        }
    }
}

impl AuthenticationProvider for BearerTokenProvider {
    fn authenticate_request(&self, request: &mut RequestInformation) {
        // insert replaces every existing Authorization value
        request.headers.insert(AUTHORIZATION, self.header.clone());
    }
}

impl fmt::Debug for BearerTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenProvider")
            .field("token", &"[REDACTED]")
            .field("token_hint", &self.token_hint())
            .finish()
    }
}

/// Leaves requests untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousAuthenticationProvider;

impl AuthenticationProvider for AnonymousAuthenticationProvider {
    fn authenticate_request(&self, _request: &mut RequestInformation) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::HttpMethod;
    use serial_test::serial;

    fn request() -> RequestInformation {
        RequestInformation::new(HttpMethod::Get, vec!["v2".into(), "account".into()])
    }

    #[test]
    fn adds_single_bearer_header() {
        let auth = BearerTokenProvider::new("dop_v1_abcdef123456").unwrap();
        let mut req = request();
        assert!(req.headers.get(AUTHORIZATION).is_none());

        auth.authenticate_request(&mut req);

        let values: Vec<_> = req.headers.get_all(AUTHORIZATION).iter().collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].to_str().unwrap(), "Bearer dop_v1_abcdef123456");
    }

    #[test]
    fn repeated_calls_overwrite() {
        let auth = BearerTokenProvider::new("dop_v1_abcdef123456").unwrap();
        let mut req = request();
        auth.authenticate_request(&mut req);
        auth.authenticate_request(&mut req);
        assert_eq!(req.headers.get_all(AUTHORIZATION).iter().count(), 1);
    }

    #[test]
    fn replaces_foreign_authorization_values() {
        let auth = BearerTokenProvider::new("dop_v1_abcdef123456").unwrap();
        let mut req = request();
        req.headers
            .append(AUTHORIZATION, HeaderValue::from_static("Basic Zm9vOmJhcg=="));
        req.headers
            .append(AUTHORIZATION, HeaderValue::from_static("Bearer stale"));

        auth.authenticate_request(&mut req);

        let values: Vec<_> = req.headers.get_all(AUTHORIZATION).iter().collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].to_str().unwrap(), "Bearer dop_v1_abcdef123456");
    }

    #[test]
    fn rejects_blank_tokens() {
        assert!(matches!(
            BearerTokenProvider::new(""),
            Err(DoError::Configuration(_))
        ));
        assert!(matches!(
            BearerTokenProvider::new("   "),
            Err(DoError::Configuration(_))
        ));
    }

    #[test]
    fn rejects_tokens_with_newlines() {
        assert!(BearerTokenProvider::new("abc\ndef").is_err());
    }

    #[test]
    fn debug_output_is_redacted() {
        let auth = BearerTokenProvider::new("dop_v1_supersecretvalue").unwrap();
        let out = format!("{auth:?}");
        assert!(!out.contains("supersecret"));
        assert!(out.contains("...alue"));
    }

    #[test]
    fn anonymous_provider_adds_nothing() {
        let mut req = request();
        AnonymousAuthenticationProvider.authenticate_request(&mut req);
        assert!(req.headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    #[serial]
    fn from_env_var_requires_value() {
        let name = "DO_SDK_TEST_TOKEN";
        std::env::remove_var(name);
        assert!(BearerTokenProvider::from_env_var(name).is_err());

        std::env::set_var(name, "");
        assert!(BearerTokenProvider::from_env_var(name).is_err());

        std::env::set_var(name, "dop_v1_fromenv0001");
        let auth = BearerTokenProvider::from_env_var(name).unwrap();
        assert_eq!(auth.token_hint(), "...0001");
        std::env::remove_var(name);
    }
}
