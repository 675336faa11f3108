use serde_json::Value;

use super::SpotifyClient;
use crate::{config, errors::FetchError, types::TrackMetadata};

impl SpotifyClient {
    /// Fetches title and artists of a single track.
    ///
    /// The title is trimmed and must not be empty. Artist names keep the order
    /// the API returns them in; entries without a name are skipped.
    pub async fn get_track(&self, track_id: &str, token: &str) -> Result<TrackMetadata, FetchError> {
        let res = self
            .http
            .get(format!("{}/tracks/{}", self.api_url, track_id))
            .bearer_auth(token)
            .timeout(config::SPOTIFY_TIMEOUT)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FetchError::LookupFailed(format!("Spotify track request failed: {}", e)))?;

        let json: Value = res
            .json()
            .await
            .map_err(|e| FetchError::LookupFailed(format!("Unreadable Spotify track response: {}", e)))?;

        parse_track(&json)
    }
}

fn parse_track(json: &Value) -> Result<TrackMetadata, FetchError> {
    let title = json["name"].as_str().unwrap_or_default().trim().to_string();
    if title.is_empty() {
        return Err(FetchError::LookupFailed(
            "Spotify API did not return a track title.".to_string(),
        ));
    }

    let artists = json["artists"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|a| a["name"].as_str())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(TrackMetadata { title, artists })
}
