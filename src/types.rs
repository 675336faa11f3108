use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Spotify application credentials used for the client-credentials flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

/// Contents of `settings.json`. Loading reads the fields one by one, see
/// [`crate::management::SettingsManager::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub client_id: String,
    pub client_secret: String,
    pub auto_clipboard: bool,
}

impl Settings {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.client_id.clone(), self.client_secret.clone())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMetadata {
    pub title: String,
    pub artists: Vec<String>,
}

impl TrackMetadata {
    /// Artist names joined the way they appear in the search query.
    pub fn artist_line(&self) -> String {
        self.artists.join(" & ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareResult {
    pub url: String,
    pub video_id: String,
    pub title: String,
    pub artists: Vec<String>,
    pub query: String,
}

#[derive(Tabled)]
pub struct ShareTableRow {
    pub track: String,
    pub query: String,
    pub link: String,
}

impl From<&ShareResult> for ShareTableRow {
    fn from(result: &ShareResult) -> Self {
        let artists = result.artists.join(" & ");
        let track = if artists.is_empty() {
            result.title.clone()
        } else {
            format!("{} - {}", result.title, artists)
        };

        Self {
            track,
            query: result.query.clone(),
            link: result.url.clone(),
        }
    }
}
