//! # Spotify Wrapper
//!
//! A thin, read-only client for the Spotify Web API using the OAuth2
//! client-credentials grant.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spotify_wrapper::Spotify;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let spotify = Spotify::new("client_id", "client_secret").await?;
//!
//!     let track = spotify.tracks.get_track("11dFghVXANMlKmJXsNCbNl", None).await?;
//!     println!("Track: {}", track["name"]);
//!
//!     let genres = spotify.genres.get_available_genre_seeds().await?;
//!     println!("Genres: {}", genres);
//!
//!     Ok(())
//! }
//! ```
//!
//! The token is requested once when the client is built and never
//! refreshed. Responses are returned as untyped `serde_json::Value`.
//!
//! ## Low-Level APIs
//!
//! - [`Authenticator`] - token exchange and the authenticated GET
//! - [`TracksApi`], [`AlbumsApi`], [`ArtistsApi`], [`PlaylistsApi`],
//!   [`GenresApi`] - one method per endpoint

pub mod api;
pub mod auth;
pub mod error;
pub mod models;
mod spotify;

// Main interface (recommended)
pub use spotify::Spotify;

// Low-level APIs
pub use api::{AlbumsApi, ArtistsApi, GenresApi, PlaylistsApi, TracksApi};
pub use auth::{authenticate, Authenticator};
pub use error::{Result, SpotifyError};
pub use models::{AccessToken, Credentials, Endpoints, Page, RecommendationRequest};
