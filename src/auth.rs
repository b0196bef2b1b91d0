//! Client-credentials authentication.
//!
//! The [`Authenticator`] exchanges a client id/secret pair for a bearer
//! token once, at construction, and then signs every Web API request with
//! it. The token is never refreshed; once it expires the server starts
//! answering 401 and callers see [`SpotifyError::Http`].

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::error::{Result, SpotifyError};
use crate::models::{AccessToken, Credentials, Endpoints};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("spotify-wrapper/", env!("CARGO_PKG_VERSION"));

/// Exchange credentials for a bearer token using the client-credentials grant.
///
/// Sends `grant_type=client_credentials` as a form body with HTTP Basic
/// authorization built from the client id and secret.
///
/// # Errors
///
/// Returns `Authentication` with the status and raw body when the token
/// endpoint answers with a non-2xx status or a 2xx without a usable token.
pub async fn authenticate(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<AccessToken> {
    debug!("POST {} for client {}", token_url, credentials.client_id);

    let response = client
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        error!("Token request rejected: {}", status);
        return Err(SpotifyError::Authentication { status, body });
    }

    let token: AccessToken = match serde_json::from_str(&body) {
        Ok(token) => token,
        Err(e) => {
            error!("Unreadable token response: {}", e);
            return Err(SpotifyError::Authentication { status, body });
        }
    };

    if token.access_token.is_empty() {
        return Err(SpotifyError::Authentication { status, body });
    }

    info!(
        "Authenticated with client credentials, token valid for {}s",
        token.expires_in
    );
    Ok(token)
}

/// Holds the bearer token and the HTTP client used by every resource client.
///
/// Share it between resource clients with an `Arc`; the token is written
/// once during construction and only read afterwards.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use spotify_wrapper::{Authenticator, TracksApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let auth = Arc::new(Authenticator::new("client_id", "client_secret").await?);
///     let tracks = TracksApi::new(auth);
///     let track = tracks.get_track("11dFghVXANMlKmJXsNCbNl", None).await?;
///     println!("{}", track["name"]);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Authenticator {
    client: Client,
    credentials: Credentials,
    endpoints: Endpoints,
    token: AccessToken,
}

impl Authenticator {
    /// Authenticate against the real Spotify endpoints.
    pub async fn new<S1: Into<String>, S2: Into<String>>(
        client_id: S1,
        client_secret: S2,
    ) -> Result<Self> {
        Self::with_endpoints(
            Credentials::new(client_id, client_secret),
            Endpoints::default(),
        )
        .await
    }

    /// Authenticate against custom endpoints.
    ///
    /// # Errors
    ///
    /// Returns `Authentication` if the credentials are rejected.
    pub async fn with_endpoints(credentials: Credentials, endpoints: Endpoints) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SpotifyError::Client(format!("Failed to create client: {}", e)))?;

        Self::with_client(client, credentials, endpoints).await
    }

    /// Authenticate using a preconfigured HTTP client (proxies, timeouts, TLS).
    pub async fn with_client(
        client: Client,
        credentials: Credentials,
        endpoints: Endpoints,
    ) -> Result<Self> {
        let token = authenticate(&client, &endpoints.token_url, &credentials).await?;

        Ok(Self {
            client,
            credentials,
            endpoints,
            token,
        })
    }

    /// The bearer token obtained at construction.
    pub fn token(&self) -> &str {
        &self.token.access_token
    }

    /// Full token response, including the server-reported lifetime.
    pub fn access_token(&self) -> &AccessToken {
        &self.token
    }

    /// Credentials the token was issued for.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Token and API URLs this authenticator talks to.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Make an authenticated GET request to an API path like `tracks/{id}`.
    ///
    /// The JSON body is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for 404 and `Http` for any other non-2xx status,
    /// both carrying the status and raw body.
    pub async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        let url = self.endpoints.api_url(path);
        debug!("GET {} with params: {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token.access_token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Spotify API error on {}: {}", path, status);
            return Err(SpotifyError::from_response(status, body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
