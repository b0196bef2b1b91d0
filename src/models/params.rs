//! Optional query parameters shared by several endpoints.

/// Paging window for list endpoints.
///
/// Both fields are forwarded as-is; the server applies its own defaults
/// when they are omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Page {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    /// Only a limit, starting from the first item.
    pub fn limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
        }
    }
}

/// Default number of recommended tracks.
pub const DEFAULT_RECOMMENDATION_LIMIT: u32 = 20;

/// Seeds and tunables for `GET /recommendations`.
///
/// # Example
///
/// ```rust,no_run
/// use spotify_wrapper::RecommendationRequest;
///
/// let request = RecommendationRequest::new()
///     .seed_genre("ambient")
///     .seed_track("0c6xIDDpzE81m2q797ordA")
///     .limit(10)
///     .attribute("target_energy", "0.3");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub seed_artists: Vec<String>,
    pub seed_genres: Vec<String>,
    pub seed_tracks: Vec<String>,
    pub limit: u32,
    pub market: Option<String>,
    /// Extra tunable attributes (`min_*`, `max_*`, `target_*`).
    pub attributes: Vec<(String, String)>,
}

impl Default for RecommendationRequest {
    fn default() -> Self {
        Self {
            seed_artists: Vec::new(),
            seed_genres: Vec::new(),
            seed_tracks: Vec::new(),
            limit: DEFAULT_RECOMMENDATION_LIMIT,
            market: None,
            attributes: Vec::new(),
        }
    }
}

impl RecommendationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_artist<S: Into<String>>(mut self, id: S) -> Self {
        self.seed_artists.push(id.into());
        self
    }

    pub fn seed_genre<S: Into<String>>(mut self, genre: S) -> Self {
        self.seed_genres.push(genre.into());
        self
    }

    pub fn seed_track<S: Into<String>>(mut self, id: S) -> Self {
        self.seed_tracks.push(id.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn market<S: Into<String>>(mut self, market: S) -> Self {
        self.market = Some(market.into());
        self
    }

    pub fn attribute<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.attributes.push((key.into(), value.to_string()));
        self
    }
}
