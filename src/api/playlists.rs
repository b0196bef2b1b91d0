//! Playlist endpoints, including the browse listings that return playlists.

use std::sync::Arc;

use serde_json::Value;

use super::Query;
use crate::auth::Authenticator;
use crate::error::Result;
use crate::models::Page;

/// Client for playlists.
#[derive(Debug, Clone)]
pub struct PlaylistsApi {
    auth: Arc<Authenticator>,
}

impl PlaylistsApi {
    pub fn new(auth: Arc<Authenticator>) -> Self {
        Self { auth }
    }

    /// Get a playlist by ID.
    ///
    /// `fields` is Spotify's field filter, e.g. `"name,tracks.items(track(name))"`.
    pub async fn get_playlist(
        &self,
        playlist_id: &str,
        market: Option<&str>,
        fields: Option<&str>,
    ) -> Result<Value> {
        let query = Query::new()
            .push_opt("market", market)
            .push_opt("fields", fields);
        self.auth
            .get(&format!("playlists/{}", playlist_id), query.as_slice())
            .await
    }

    /// Get one page of a playlist's items.
    pub async fn get_playlist_items(
        &self,
        playlist_id: &str,
        market: Option<&str>,
        fields: Option<&str>,
        page: Page,
    ) -> Result<Value> {
        let query = Query::new()
            .push_opt("market", market)
            .push_opt("fields", fields)
            .page(page);
        self.auth
            .get(&format!("playlists/{}/tracks", playlist_id), query.as_slice())
            .await
    }

    /// Get the cover images of a playlist.
    pub async fn get_playlist_cover_image(&self, playlist_id: &str) -> Result<Value> {
        self.auth
            .get(&format!("playlists/{}/images", playlist_id), &[])
            .await
    }

    /// Get Spotify's featured playlists.
    pub async fn get_featured_playlists(
        &self,
        country: Option<&str>,
        locale: Option<&str>,
        page: Page,
    ) -> Result<Value> {
        let query = Query::new()
            .push_opt("country", country)
            .push_opt("locale", locale)
            .page(page);
        self.auth
            .get("browse/featured-playlists", query.as_slice())
            .await
    }

    /// Get the playlists tagged with a browse category.
    pub async fn get_category_playlists(
        &self,
        category_id: &str,
        country: Option<&str>,
        page: Page,
    ) -> Result<Value> {
        let query = Query::new().push_opt("country", country).page(page);
        self.auth
            .get(
                &format!("browse/categories/{}/playlists", category_id),
                query.as_slice(),
            )
            .await
    }
}
