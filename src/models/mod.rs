//! Plain data types used by the client.
//!
//! Response bodies are passed through as `serde_json::Value`; the types here
//! cover credentials, tokens, endpoints and request options.

pub mod auth;
pub mod params;

pub use auth::{AccessToken, Credentials, Endpoints, API_BASE_URL, TOKEN_URL};
pub use params::{Page, RecommendationRequest, DEFAULT_RECOMMENDATION_LIMIT};
