//! In-process mock of the Spotify accounts and Web API hosts.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use spotify_wrapper::{Authenticator, Credentials, Endpoints, Spotify};

pub const CLIENT_ID: &str = "test-client-id";
pub const CLIENT_SECRET: &str = "test-client-secret";
pub const TOKEN: &str = "BQD-mock-access-token";

const TOKEN_PATH: &str = "/api/token";

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub authorization: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
struct MockState {
    routes: Mutex<HashMap<String, (StatusCode, Value)>>,
    requests: Mutex<Vec<Recorded>>,
}

pub struct MockSpotify {
    state: Arc<MockState>,
    root: String,
}

impl MockSpotify {
    /// Bind to an ephemeral port and serve in the background.
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            state,
            root: format!("http://{}", addr),
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::with_root(&self.root)
    }

    pub fn credentials() -> Credentials {
        Credentials::new(CLIENT_ID, CLIENT_SECRET)
    }

    /// Serve `body` with `status` for `path` (e.g. `/v1/tracks/abc`).
    pub fn respond(&self, path: &str, status: StatusCode, body: Value) {
        self.state
            .routes
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Requests made to the Web API, excluding the token exchange.
    pub fn api_requests(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.path != TOKEN_PATH)
            .collect()
    }

    pub fn token_requests(&self) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.path == TOKEN_PATH)
            .count()
    }

    /// The single API request made so far.
    pub fn last_api_request(&self) -> Recorded {
        let mut requests = self.api_requests();
        assert_eq!(requests.len(), 1, "expected exactly one API request");
        requests.remove(0)
    }

    pub async fn authenticator(&self) -> Arc<Authenticator> {
        let auth = Authenticator::with_client(http_client(), Self::credentials(), self.endpoints())
            .await
            .unwrap();
        Arc::new(auth)
    }

    pub async fn spotify(&self) -> Spotify {
        Spotify::with_client(http_client(), Self::credentials(), self.endpoints())
            .await
            .unwrap()
    }
}

/// HTTP client that talks to the mock directly, ignoring proxy env vars.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let url = reqwest::Url::parse(&format!("http://mock{}", uri)).unwrap();
    let query = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(Recorded {
        method,
        path: path.clone(),
        query,
        authorization: authorization.clone(),
        body: body.clone(),
    });

    if let Some((status, value)) = state.routes.lock().unwrap().get(&path).cloned() {
        return (status, Json(value)).into_response();
    }

    if path == TOKEN_PATH {
        return token_response(authorization.as_deref(), &body);
    }

    let bearer = format!("Bearer {}", TOKEN);
    if authorization.as_deref() != Some(bearer.as_str()) {
        return error_response(StatusCode::UNAUTHORIZED, "Invalid access token");
    }

    error_response(StatusCode::NOT_FOUND, "Non existing id")
}

fn token_response(authorization: Option<&str>, body: &str) -> Response {
    let expected = format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", CLIENT_ID, CLIENT_SECRET))
    );

    if authorization != Some(expected.as_str()) || body != "grant_type=client_credentials" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_client",
                "error_description": "Invalid client"
            })),
        )
            .into_response();
    }

    Json(json!({
        "access_token": TOKEN,
        "token_type": "Bearer",
        "expires_in": 3600
    }))
    .into_response()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "error": { "status": status.as_u16(), "message": message } })),
    )
        .into_response()
}
