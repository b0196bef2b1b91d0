//! Artist endpoints.

use std::sync::Arc;

use serde_json::Value;

use super::{join_ids, Query};
use crate::auth::Authenticator;
use crate::error::Result;
use crate::models::Page;

/// Most artist IDs accepted by one `GET /artists` request.
pub const MAX_ARTIST_IDS: usize = 50;

/// Client for artists and their catalogue.
#[derive(Debug, Clone)]
pub struct ArtistsApi {
    auth: Arc<Authenticator>,
}

impl ArtistsApi {
    pub fn new(auth: Arc<Authenticator>) -> Self {
        Self { auth }
    }

    /// Get an artist by ID.
    pub async fn get_artist(&self, artist_id: &str) -> Result<Value> {
        self.auth.get(&format!("artists/{}", artist_id), &[]).await
    }

    /// Get several artists in one request (at most [`MAX_ARTIST_IDS`]).
    pub async fn get_several_artists<S: AsRef<str>>(&self, artist_ids: &[S]) -> Result<Value> {
        let query = Query::new().push("ids", join_ids(artist_ids, MAX_ARTIST_IDS)?);
        self.auth.get("artists", query.as_slice()).await
    }

    /// Get one page of an artist's albums.
    ///
    /// `include_groups` filters by album type, e.g. `["album", "single"]`.
    pub async fn get_artist_albums<S: AsRef<str>>(
        &self,
        artist_id: &str,
        include_groups: &[S],
        market: Option<&str>,
        page: Page,
    ) -> Result<Value> {
        let groups = include_groups
            .iter()
            .map(|g| g.as_ref())
            .collect::<Vec<_>>()
            .join(",");

        let query = Query::new()
            .push_opt("include_groups", Some(groups).filter(|g| !g.is_empty()))
            .push_opt("market", market)
            .page(page);
        self.auth
            .get(&format!("artists/{}/albums", artist_id), query.as_slice())
            .await
    }

    /// Get an artist's top tracks in a market.
    pub async fn get_artist_top_tracks(
        &self,
        artist_id: &str,
        market: Option<&str>,
    ) -> Result<Value> {
        let query = Query::new().push_opt("market", market);
        self.auth
            .get(&format!("artists/{}/top-tracks", artist_id), query.as_slice())
            .await
    }

    /// Get artists similar to the given one.
    pub async fn get_artist_related_artists(&self, artist_id: &str) -> Result<Value> {
        self.auth
            .get(&format!("artists/{}/related-artists", artist_id), &[])
            .await
    }
}
