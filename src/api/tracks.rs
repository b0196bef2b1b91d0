//! Track endpoints.

use std::sync::Arc;

use serde_json::Value;

use super::{join_ids, Query};
use crate::auth::Authenticator;
use crate::error::Result;
use crate::models::RecommendationRequest;

/// Most track IDs accepted by one `GET /tracks` request.
pub const MAX_TRACK_IDS: usize = 100;

/// Most track IDs accepted by one `GET /audio-features` request.
pub const MAX_AUDIO_FEATURE_IDS: usize = 100;

/// Client for tracks, audio features, audio analysis and recommendations.
#[derive(Debug, Clone)]
pub struct TracksApi {
    auth: Arc<Authenticator>,
}

impl TracksApi {
    pub fn new(auth: Arc<Authenticator>) -> Self {
        Self { auth }
    }

    /// Get a track by ID.
    pub async fn get_track(&self, track_id: &str, market: Option<&str>) -> Result<Value> {
        let query = Query::new().push_opt("market", market);
        self.auth
            .get(&format!("tracks/{}", track_id), query.as_slice())
            .await
    }

    /// Get several tracks in one request.
    ///
    /// # Errors
    ///
    /// Returns `TooManyIds` without contacting the API when more than
    /// [`MAX_TRACK_IDS`] IDs are given.
    pub async fn get_several_tracks<S: AsRef<str>>(
        &self,
        track_ids: &[S],
        market: Option<&str>,
    ) -> Result<Value> {
        let query = Query::new()
            .push("ids", join_ids(track_ids, MAX_TRACK_IDS)?)
            .push_opt("market", market);
        self.auth.get("tracks", query.as_slice()).await
    }

    /// Get audio features (danceability, energy, tempo, ...) for a track.
    pub async fn get_track_audio_features(&self, track_id: &str) -> Result<Value> {
        self.auth
            .get(&format!("audio-features/{}", track_id), &[])
            .await
    }

    /// Get audio features for several tracks.
    pub async fn get_several_audio_features<S: AsRef<str>>(
        &self,
        track_ids: &[S],
    ) -> Result<Value> {
        let query = Query::new().push("ids", join_ids(track_ids, MAX_AUDIO_FEATURE_IDS)?);
        self.auth.get("audio-features", query.as_slice()).await
    }

    /// Get the low-level audio analysis (sections, beats, segments) for a track.
    pub async fn get_track_audio_analysis(&self, track_id: &str) -> Result<Value> {
        self.auth
            .get(&format!("audio-analysis/{}", track_id), &[])
            .await
    }

    /// Get track recommendations from seed artists, genres and tracks.
    ///
    /// Empty seed lists are not sent. Extra attributes are sent verbatim and
    /// override `limit`, `market` or a seed list of the same name.
    pub async fn get_recommendations(&self, request: &RecommendationRequest) -> Result<Value> {
        let seeds = [
            ("seed_artists", &request.seed_artists),
            ("seed_genres", &request.seed_genres),
            ("seed_tracks", &request.seed_tracks),
        ];

        let mut query = Query::new().push("limit", request.limit);
        for (key, values) in seeds {
            if !values.is_empty() {
                query = query.push(key, values.join(","));
            }
        }
        query = query.push_opt("market", request.market.as_deref());
        for (key, value) in &request.attributes {
            query = query.set(key.as_str(), value);
        }

        self.auth.get("recommendations", query.as_slice()).await
    }
}
