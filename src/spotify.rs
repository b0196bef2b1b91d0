//! Unified Spotify interface.
//!
//! Authenticates once and wires the shared token into every resource client.

use std::sync::Arc;

use crate::api::{AlbumsApi, ArtistsApi, GenresApi, PlaylistsApi, TracksApi};
use crate::auth::Authenticator;
use crate::error::Result;
use crate::models::{Credentials, Endpoints};

/// Main Spotify interface.
///
/// # Example
///
/// ```rust,no_run
/// use spotify_wrapper::{Page, Spotify};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let spotify = Spotify::new("client_id", "client_secret").await?;
///
///     let track = spotify.tracks.get_track("11dFghVXANMlKmJXsNCbNl", Some("US")).await?;
///     println!("Track: {}", track["name"]);
///
///     let releases = spotify.albums.get_new_releases(None, Page::limit(5)).await?;
///     println!("{} new releases", releases["items"].as_array().map_or(0, |a| a.len()));
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Spotify {
    auth: Arc<Authenticator>,
    pub tracks: TracksApi,
    pub albums: AlbumsApi,
    pub artists: ArtistsApi,
    pub playlists: PlaylistsApi,
    pub genres: GenresApi,
}

impl Spotify {
    /// Authenticate with client credentials against the real Spotify endpoints.
    ///
    /// # Errors
    ///
    /// Returns `Authentication` if the credentials are rejected.
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
    pub async fn with_endpoints(credentials: Credentials, endpoints: Endpoints) -> Result<Self> {
        let auth = Authenticator::with_endpoints(credentials, endpoints).await?;
        Ok(Self::from_authenticator(Arc::new(auth)))
    }

    /// Authenticate using a preconfigured HTTP client.
    pub async fn with_client(
        client: reqwest::Client,
        credentials: Credentials,
        endpoints: Endpoints,
    ) -> Result<Self> {
        let auth = Authenticator::with_client(client, credentials, endpoints).await?;
        Ok(Self::from_authenticator(Arc::new(auth)))
    }

    /// Build every resource client around an existing authenticator.
    pub fn from_authenticator(auth: Arc<Authenticator>) -> Self {
        Self {
            tracks: TracksApi::new(Arc::clone(&auth)),
            albums: AlbumsApi::new(Arc::clone(&auth)),
            artists: ArtistsApi::new(Arc::clone(&auth)),
            playlists: PlaylistsApi::new(Arc::clone(&auth)),
            genres: GenresApi::new(Arc::clone(&auth)),
            auth,
        }
    }

    /// The shared authenticator.
    pub fn authenticator(&self) -> &Arc<Authenticator> {
        &self.auth
    }
}
