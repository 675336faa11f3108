//! # Fetch Pipeline
//!
//! Turns a Spotify track URL into a YouTube share link:
//!
//! ```text
//! ParseURL → Authenticate → LookupTrack → BuildQuery → LocateVideo → Complete
//! ```
//!
//! Every step runs after the previous one finished. The first failing step
//! ends the run with its [`FetchError`]; nothing is retried and no partial
//! result is returned. Apart from the shared credentials the pipeline keeps
//! no state between runs, so running it twice on the same input against the
//! same upstream answers gives the same result.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    errors::FetchError,
    spotify::SpotifyClient,
    types::{Credentials, ShareResult},
    utils,
    youtube::VideoLocator,
};

#[derive(Clone)]
pub struct FetchPipeline {
    spotify: SpotifyClient,
    locator: Arc<dyn VideoLocator>,
    credentials: Arc<RwLock<Credentials>>,
}

impl FetchPipeline {
    pub fn new(
        spotify: SpotifyClient,
        locator: Arc<dyn VideoLocator>,
        credentials: Credentials,
    ) -> Self {
        Self {
            spotify,
            locator,
            credentials: Arc::new(RwLock::new(credentials)),
        }
    }

    /// Replaces the credentials used by subsequent runs. A run already past
    /// authentication keeps the credentials it started with.
    pub async fn set_credentials(&self, credentials: Credentials) {
        *self.credentials.write().await = credentials;
    }

    pub async fn credentials(&self) -> Credentials {
        self.credentials.read().await.clone()
    }

    pub async fn run(&self, url: &str) -> Result<ShareResult, FetchError> {
        let track_id = parse_url(url)?;
        tracing::debug!(track_id, "parsed track url");

        let credentials = self.credentials().await;
        let token = self.spotify.get_token(&credentials).await?;
        tracing::debug!(expires_in = token.expires_in, "obtained spotify token");

        let track = self.spotify.get_track(track_id, &token.access_token).await?;
        tracing::debug!(title = %track.title, artists = %track.artist_line(), "looked up track");

        let query = utils::build_query(&track.title, &track.artists);
        tracing::debug!(query = %query, locator = self.locator.name(), "locating video");

        let video_id = self.locator.locate(&query).await?.ok_or_else(|| {
            FetchError::NoMatch("No YouTube results found for that track.".to_string())
        })?;

        Ok(ShareResult {
            url: utils::share_url(&video_id),
            video_id,
            title: track.title,
            artists: track.artists,
            query,
        })
    }
}

/// Validates the input and returns the track id it names.
pub fn parse_url(url: &str) -> Result<&str, FetchError> {
    let url = url.trim();
    if !utils::is_track_url(url) {
        return Err(FetchError::InvalidInput(
            "Please paste a valid Spotify track URL.".to_string(),
        ));
    }

    utils::extract_track_id(url).ok_or_else(|| {
        FetchError::InvalidInput("Please paste a valid Spotify track URL.".to_string())
    })
}
