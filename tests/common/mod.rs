#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Html,
    routing::{get, post},
};
use reqwest::Client;
use serde_json::{Value, json};
use spot2yt::{errors::FetchError, spotify::SpotifyClient, youtube::VideoLocator};

pub fn http() -> Client {
    Client::builder().no_proxy().build().unwrap()
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub struct SpotifyState {
    pub token_status: StatusCode,
    pub track: Value,
    pub hits: AtomicUsize,
    pub authorization: Mutex<Vec<String>>,
    pub track_ids: Mutex<Vec<String>>,
}

pub struct MockSpotify {
    pub base: String,
    pub state: Arc<SpotifyState>,
}

impl MockSpotify {
    pub fn client(&self) -> SpotifyClient {
        SpotifyClient::new(Some(http()))
            .with_endpoints(format!("{}/api/token", self.base), format!("{}/v1", self.base))
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }
}

async fn token(State(state): State<Arc<SpotifyState>>, headers: HeaderMap, body: String) -> (StatusCode, Json<Value>) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state.authorization.lock().unwrap().push(auth);

    if !state.token_status.is_success() {
        return (state.token_status, Json(json!({"error": "invalid_client"})));
    }
    if body != "grant_type=client_credentials" {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "unsupported_grant_type"})));
    }

    (
        StatusCode::OK,
        Json(json!({"access_token": "test-token", "token_type": "Bearer", "expires_in": 3600})),
    )
}

async fn track(
    State(state): State<Arc<SpotifyState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.track_ids.lock().unwrap().push(id);

    let bearer = headers.get("authorization").and_then(|v| v.to_str().ok());
    if bearer != Some("Bearer test-token") {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "no token"})));
    }
    if state.track.is_null() {
        return (StatusCode::NOT_FOUND, Json(json!({"error": "not found"})));
    }

    (StatusCode::OK, Json(state.track.clone()))
}

/// Serves a token endpoint and a single-track endpoint. A `Null` track makes
/// the track endpoint answer 404.
pub async fn spawn_spotify(track: Value, token_status: StatusCode) -> MockSpotify {
    let state = Arc::new(SpotifyState {
        token_status,
        track,
        hits: AtomicUsize::new(0),
        authorization: Mutex::new(Vec::new()),
        track_ids: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/api/token", post(token))
        .route("/v1/tracks/{id}", get(self::track))
        .with_state(Arc::clone(&state));

    MockSpotify {
        base: serve(app).await,
        state,
    }
}

pub struct YoutubeState {
    pub status: StatusCode,
    pub html: String,
    pub queries: Mutex<Vec<String>>,
    pub user_agents: Mutex<Vec<String>>,
    pub languages: Mutex<Vec<String>>,
}

pub struct MockYoutube {
    pub search_url: String,
    pub state: Arc<YoutubeState>,
}

async fn results(
    State(state): State<Arc<YoutubeState>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, Html<String>) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    state
        .queries
        .lock()
        .unwrap()
        .push(params.get("search_query").cloned().unwrap_or_default());
    state.user_agents.lock().unwrap().push(header("user-agent"));
    state.languages.lock().unwrap().push(header("accept-language"));

    (state.status, Html(state.html.clone()))
}

pub async fn spawn_youtube(html: impl Into<String>, status: StatusCode) -> MockYoutube {
    let state = Arc::new(YoutubeState {
        status,
        html: html.into(),
        queries: Mutex::new(Vec::new()),
        user_agents: Mutex::new(Vec::new()),
        languages: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/results", get(results))
        .with_state(Arc::clone(&state));

    MockYoutube {
        search_url: format!("{}/results", serve(app).await),
        state,
    }
}

/// Results page with the given video ids, in order, inside the usual
/// renderer nesting.
pub fn results_page(video_ids: &[&str]) -> String {
    let contents: Vec<Value> = video_ids
        .iter()
        .map(|id| json!({"videoRenderer": {"videoId": id, "title": {"runs": [{"text": "{title}"}]}}}))
        .collect();
    let data = json!({
        "responseContext": {"visitorData": "abc"},
        "contents": {
            "twoColumnSearchResultsRenderer": {
                "primaryContents": {
                    "sectionListRenderer": {
                        "contents": [{"itemSectionRenderer": {"contents": contents}}]
                    }
                }
            }
        }
    });

    format!(
        "<!DOCTYPE html><html><head><script nonce=\"x\">var ytInitialData = {};</script></head><body><div>{{}}</div></body></html>",
        data
    )
}

/// Locator that answers from memory and records every query it receives.
pub struct StubLocator {
    pub video_id: Option<String>,
    pub queries: Mutex<Vec<String>>,
}

impl StubLocator {
    pub fn new(video_id: Option<&str>) -> Self {
        Self {
            video_id: video_id.map(str::to_string),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoLocator for StubLocator {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn locate(&self, query: &str) -> Result<Option<String>, FetchError> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok(self.video_id.clone())
    }
}
