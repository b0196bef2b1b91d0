//! Album endpoints.

use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use super::{join_ids, Query};
use crate::auth::Authenticator;
use crate::error::{Result, SpotifyError};
use crate::models::Page;

/// Most album IDs accepted by one `GET /albums` request.
pub const MAX_ALBUM_IDS: usize = 20;

/// Client for albums and new releases.
#[derive(Debug, Clone)]
pub struct AlbumsApi {
    auth: Arc<Authenticator>,
}

impl AlbumsApi {
    pub fn new(auth: Arc<Authenticator>) -> Self {
        Self { auth }
    }

    /// Get an album by ID.
    pub async fn get_album(&self, album_id: &str, market: Option<&str>) -> Result<Value> {
        let query = Query::new().push_opt("market", market);
        self.auth
            .get(&format!("albums/{}", album_id), query.as_slice())
            .await
    }

    /// Get several albums in one request (at most [`MAX_ALBUM_IDS`]).
    pub async fn get_several_albums<S: AsRef<str>>(
        &self,
        album_ids: &[S],
        market: Option<&str>,
    ) -> Result<Value> {
        let query = Query::new()
            .push("ids", join_ids(album_ids, MAX_ALBUM_IDS)?)
            .push_opt("market", market);
        self.auth.get("albums", query.as_slice()).await
    }

    /// Get one page of an album's tracks.
    pub async fn get_album_tracks(
        &self,
        album_id: &str,
        market: Option<&str>,
        page: Page,
    ) -> Result<Value> {
        let query = Query::new().push_opt("market", market).page(page);
        self.auth
            .get(&format!("albums/{}/tracks", album_id), query.as_slice())
            .await
    }

    /// Get new album releases featured in Spotify.
    ///
    /// Returns the `albums` paging object from the response envelope.
    pub async fn get_new_releases(&self, country: Option<&str>, page: Page) -> Result<Value> {
        let query = Query::new().push_opt("country", country).page(page);
        let mut response = self.auth.get("browse/new-releases", query.as_slice()).await?;

        match response.get_mut("albums") {
            Some(albums) => Ok(albums.take()),
            None => {
                warn!("New releases response has no albums field");
                Err(SpotifyError::MissingField("albums"))
            }
        }
    }
}
