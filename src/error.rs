//! Error types for the Spotify Web API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for all Spotify operations.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// The client-credentials token exchange was rejected.
    #[error("Authentication failed ({status}): {body}")]
    Authentication { status: StatusCode, body: String },

    /// The requested resource does not exist.
    #[error("Not found ({status}): {body}")]
    NotFound { status: StatusCode, body: String },

    /// Any other non-2xx response from a resource endpoint.
    #[error("HTTP error ({status}): {body}")]
    Http { status: StatusCode, body: String },

    /// More IDs than the endpoint accepts in one request.
    #[error("Too many IDs: {given} given, at most {limit} allowed")]
    TooManyIds { limit: usize, given: usize },

    /// Response envelope lacked the expected field.
    #[error("Missing field in response: {0}")]
    MissingField(&'static str),

    /// HTTP request failed.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The HTTP client could not be constructed.
    #[error("Client error: {0}")]
    Client(String),
}

impl SpotifyError {
    /// HTTP status carried by the error, if it came from a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SpotifyError::Authentication { status, .. }
            | SpotifyError::NotFound { status, .. }
            | SpotifyError::Http { status, .. } => Some(*status),
            SpotifyError::Request(e) => e.status(),
            _ => None,
        }
    }

    /// Raw response body carried by the error, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            SpotifyError::Authentication { body, .. }
            | SpotifyError::NotFound { body, .. }
            | SpotifyError::Http { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Classify a failed resource response by status.
    pub(crate) fn from_response(status: StatusCode, body: String) -> Self {
        if status == StatusCode::NOT_FOUND {
            SpotifyError::NotFound { status, body }
        } else {
            SpotifyError::Http { status, body }
        }
    }
}

/// Result type alias for Spotify operations.
pub type Result<T> = std::result::Result<T, SpotifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = SpotifyError::from_response(StatusCode::NOT_FOUND, "gone".into());
        assert!(matches!(err, SpotifyError::NotFound { .. }));
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.body(), Some("gone"));
    }

    #[test]
    fn test_other_status_is_http_error() {
        let err = SpotifyError::from_response(StatusCode::BAD_GATEWAY, String::new());
        assert!(matches!(err, SpotifyError::Http { .. }));
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn test_local_errors_have_no_status() {
        let err = SpotifyError::TooManyIds { limit: 20, given: 21 };
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Too many IDs: 21 given, at most 20 allowed");
    }
}
