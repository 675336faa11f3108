use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::Value;

use super::SpotifyClient;
use crate::{
    config,
    errors::FetchError,
    types::{Credentials, Token},
};

const MISSING_CREDENTIALS: &str =
    "Spotify API credentials are missing. Set them with `spot2yt credentials`.";

impl SpotifyClient {
    /// Requests an app-only access token with the client-credentials grant.
    ///
    /// Fails with `AuthFailed` before any request is sent when either the
    /// client id or the client secret is empty.
    ///
    /// # Example
    ///
    /// ```
    /// let client = SpotifyClient::new(None);
    /// let token = client.get_token(&Credentials::new("id", "secret")).await?;
    /// println!("Token valid for {} seconds", token.expires_in);
    /// ```
    pub async fn get_token(&self, credentials: &Credentials) -> Result<Token, FetchError> {
        if !credentials.is_complete() {
            return Err(FetchError::AuthFailed(MISSING_CREDENTIALS.to_string()));
        }

        let basic = STANDARD.encode(format!(
            "{}:{}",
            credentials.client_id, credentials.client_secret
        ));

        let res = self
            .http
            .post(&self.token_url)
            .header("Authorization", format!("Basic {}", basic))
            .form(&[("grant_type", "client_credentials")])
            .timeout(config::SPOTIFY_TIMEOUT)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FetchError::AuthFailed(format!("Spotify token request failed: {}", e)))?;

        let json: Value = res
            .json()
            .await
            .map_err(|e| FetchError::AuthFailed(format!("Unreadable Spotify token response: {}", e)))?;

        let access_token = json["access_token"]
            .as_str()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                FetchError::AuthFailed("Spotify token response has no access_token.".to_string())
            })?;

        Ok(Token {
            access_token: access_token.to_string(),
            expires_in: json["expires_in"].as_u64().unwrap_or(3600),
        })
    }
}
