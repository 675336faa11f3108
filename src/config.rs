//! Configuration management for spot2yt.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and an optional `.env` file. It provides a centralized way to manage
//! endpoint URLs, request timeouts, credential overrides and the location of the
//! per-user settings directory.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the per-user config directory
//! 3. Application defaults

use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::types::Credentials;

/// Directory name below the platform config dir. Shared with earlier releases
/// of the tool so existing settings files keep working.
pub const APP_DIR_NAME: &str = "SpotifyToYouTube";

/// Name of the persisted settings file.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_YOUTUBE_SEARCH_URL: &str = "https://www.youtube.com/results";

/// Upper bound for each Spotify request.
pub const SPOTIFY_TIMEOUT: Duration = Duration::from_secs(15);

/// Upper bound for the YouTube search request.
pub const YOUTUBE_TIMEOUT: Duration = Duration::from_secs(20);

/// Returns the per-user application directory.
///
/// Resolves to:
/// - Linux: `~/.config/SpotifyToYouTube`
/// - macOS: `~/Library/Application Support/SpotifyToYouTube`
/// - Windows: `%APPDATA%/SpotifyToYouTube`
pub fn app_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR_NAME);
    path
}

/// Loads environment variables from a `.env` file in the application directory.
///
/// A missing file is not an error: every value has a default. Only a file that
/// exists but cannot be parsed is reported.
///
/// # Example
///
/// ```
/// use spot2yt::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), dotenv::Error> {
    load_env_from(&app_dir().join(".env")).await
}

/// Loads a specific `.env` file. Variables already present in the process
/// environment are not overwritten.
pub async fn load_env_from(path: &Path) -> Result<(), dotenv::Error> {
    if async_fs::metadata(path).await.is_err() {
        return Ok(());
    }

    dotenv::from_path(path)
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Reads `SPOTIFY_API_TOKEN_URL`, falling back to
/// `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> String {
    env_or("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_API_TOKEN_URL)
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, falling back to `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env_or("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
}

/// Returns the YouTube search results page URL.
pub fn youtube_search_url() -> String {
    env_or("YOUTUBE_SEARCH_URL", DEFAULT_YOUTUBE_SEARCH_URL)
}

/// Returns credentials from `SPOTIFY_API_AUTH_CLIENT_ID` and
/// `SPOTIFY_API_AUTH_CLIENT_SECRET` when both are set and non-empty.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn credentials_override() -> Option<Credentials> {
    let client_id = env::var("SPOTIFY_API_AUTH_CLIENT_ID").ok()?;
    let client_secret = env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").ok()?;
    let credentials = Credentials::new(client_id, client_secret);
    credentials.is_complete().then_some(credentials)
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
