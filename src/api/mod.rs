//! Resource clients for the Spotify Web API.
//!
//! Each client wraps a shared [`Authenticator`](crate::Authenticator) and
//! maps its methods one-to-one onto GET endpoints:
//! - [`TracksApi`]: tracks, audio features, audio analysis, recommendations
//! - [`AlbumsApi`]: albums, album tracks, new releases
//! - [`ArtistsApi`]: artists, discographies, top tracks, related artists
//! - [`PlaylistsApi`]: playlists, featured and category playlists
//! - [`GenresApi`]: genre seeds and browse categories

pub mod albums;
pub mod artists;
pub mod genres;
pub mod playlists;
pub mod tracks;

pub use albums::AlbumsApi;
pub use artists::ArtistsApi;
pub use genres::GenresApi;
pub use playlists::PlaylistsApi;
pub use tracks::TracksApi;

use crate::error::{Result, SpotifyError};
use crate::models::Page;

/// Ordered query parameters; `None` values are never sent.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Query(Vec<(String, String)>);

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    /// Replace the value of an existing key, or append it.
    pub(crate) fn set<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        let key = key.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
        self
    }

    pub(crate) fn push_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    pub(crate) fn page(self, page: Page) -> Self {
        self.push_opt("limit", page.limit)
            .push_opt("offset", page.offset)
    }

    pub(crate) fn as_slice(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Comma-join IDs for an `ids=` parameter, enforcing the endpoint's batch limit.
pub(crate) fn join_ids<S: AsRef<str>>(ids: &[S], limit: usize) -> Result<String> {
    if ids.len() > limit {
        return Err(SpotifyError::TooManyIds {
            limit,
            given: ids.len(),
        });
    }
    Ok(ids
        .iter()
        .map(|id| id.as_ref())
        .collect::<Vec<_>>()
        .join(","))
}
