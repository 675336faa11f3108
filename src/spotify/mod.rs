//! # Spotify Integration Module
//!
//! This module provides the small slice of the Spotify Web API that spot2yt
//! needs: an app-only access token and the metadata of a single track.
//!
//! ## Architecture
//!
//! ```text
//! Fetch Pipeline
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 client credentials)
//!     └── Track Lookup (title, artists)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The client-credentials grant needs only the application's client id and
//! secret; no user login or browser round trip is involved. The pair is sent
//! as HTTP Basic credentials to the token endpoint, which answers with a
//! short-lived bearer token. Tokens are not cached: every pipeline run
//! requests a fresh one so runs stay independent of each other.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token exchange
//! - `GET /tracks/{id}` - single track metadata
//!
//! ## Error Types
//!
//! Every failure is reported as a [`crate::errors::FetchError`]:
//! - **`AuthFailed`** - missing credentials, rejected credentials, transport errors during the exchange
//! - **`LookupFailed`** - track request errors and tracks without a title
//!
//! Timeouts are bounded by [`crate::config::SPOTIFY_TIMEOUT`] and surface as
//! the failure kind of the stage they happened in.

mod auth;
mod tracks;

use reqwest::Client;

use crate::config;

#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    token_url: String,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(http: Option<Client>) -> Self {
        Self {
            http: http.unwrap_or_default(),
            token_url: config::spotify_apitoken_url(),
            api_url: config::spotify_apiurl().trim_end_matches('/').to_string(),
        }
    }

    /// Points the client at different token and API endpoints.
    pub fn with_endpoints(mut self, token_url: impl Into<String>, api_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }
}
