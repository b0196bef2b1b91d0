//! Genre seeds and browse categories.

use std::sync::Arc;

use serde_json::Value;

use super::Query;
use crate::auth::Authenticator;
use crate::error::Result;
use crate::models::Page;

/// Client for genre seeds and browse categories.
#[derive(Debug, Clone)]
pub struct GenresApi {
    auth: Arc<Authenticator>,
}

impl GenresApi {
    pub fn new(auth: Arc<Authenticator>) -> Self {
        Self { auth }
    }

    /// Get the genres usable as recommendation seeds.
    pub async fn get_available_genre_seeds(&self) -> Result<Value> {
        self.auth
            .get("recommendations/available-genre-seeds", &[])
            .await
    }

    /// Get one page of browse categories.
    pub async fn get_browse_categories(
        &self,
        country: Option<&str>,
        locale: Option<&str>,
        page: Page,
    ) -> Result<Value> {
        let query = Query::new()
            .push_opt("country", country)
            .push_opt("locale", locale)
            .page(page);
        self.auth.get("browse/categories", query.as_slice()).await
    }

    /// Get a single browse category.
    pub async fn get_browse_category(
        &self,
        category_id: &str,
        country: Option<&str>,
        locale: Option<&str>,
    ) -> Result<Value> {
        let query = Query::new()
            .push_opt("country", country)
            .push_opt("locale", locale);
        self.auth
            .get(&format!("browse/categories/{}", category_id), query.as_slice())
            .await
    }
}
