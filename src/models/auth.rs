//! Credential, token and endpoint types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default OAuth token endpoint.
pub const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Default base URL for the Web API.
pub const API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Client id and secret issued for a Spotify application.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Application client ID.
    pub client_id: String,
    /// Application client secret.
    pub client_secret: String,
}

impl Credentials {
    pub fn new<S1: Into<String>, S2: Into<String>>(client_id: S1, client_secret: S2) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Token endpoint response for the client-credentials grant.
#[derive(Clone, Deserialize, Serialize, PartialEq)]
pub struct AccessToken {
    /// Bearer string sent with every API request.
    pub access_token: String,

    /// Always "Bearer" for this grant.
    #[serde(default)]
    pub token_type: String,

    /// Lifetime in seconds as reported by the server. Informational only.
    #[serde(default)]
    pub expires_in: u64,
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Where token and API requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// OAuth token endpoint.
    pub token_url: String,
    /// Web API base, without trailing slash (e.g. `https://api.spotify.com/v1`).
    pub api_base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            token_url: TOKEN_URL.to_string(),
            api_base_url: API_BASE_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Endpoints rooted at a single host, laid out like Spotify's
    /// (`{root}/api/token` and `{root}/v1`).
    pub fn with_root(root: &str) -> Self {
        let root = root.trim_end_matches('/');
        Self {
            token_url: format!("{}/api/token", root),
            api_base_url: format!("{}/v1", root),
        }
    }

    /// Full URL for an API path such as `tracks/abc`.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_hides_secret() {
        let creds = Credentials::new("my-id", "hunter2");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("my-id"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_token_deserialize() {
        let token: AccessToken = serde_json::from_str(
            r#"{"access_token":"abc","token_type":"Bearer","expires_in":3600}"#,
        )
        .unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.expires_in, 3600);
        assert!(!format!("{:?}", token).contains("abc"));
    }

    #[test]
    fn test_api_url_joins_cleanly() {
        let endpoints = Endpoints::with_root("http://127.0.0.1:9000/");
        assert_eq!(endpoints.token_url, "http://127.0.0.1:9000/api/token");
        assert_eq!(
            endpoints.api_url("/tracks/abc"),
            "http://127.0.0.1:9000/v1/tracks/abc"
        );
        assert_eq!(
            Endpoints::default().api_url("browse/new-releases"),
            "https://api.spotify.com/v1/browse/new-releases"
        );
    }
}
