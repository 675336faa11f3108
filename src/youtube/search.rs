use async_trait::async_trait;
use reqwest::Client;

use super::{VideoLocator, extract};
use crate::{config, errors::FetchError};

// Without a desktop browser profile the page is served in a different layout
// that carries no initial data blob.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

pub struct YoutubeScraper {
    http: Client,
    search_url: String,
}

impl YoutubeScraper {
    pub fn new(http: Option<Client>) -> Self {
        Self {
            http: http.unwrap_or_default(),
            search_url: config::youtube_search_url(),
        }
    }

    pub fn with_search_url(mut self, search_url: impl Into<String>) -> Self {
        self.search_url = search_url.into();
        self
    }

    async fn fetch_results_page(&self, query: &str) -> Result<String, FetchError> {
        let res = self
            .http
            .get(&self.search_url)
            .query(&[("search_query", query)])
            .header("User-Agent", USER_AGENT)
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .timeout(config::YOUTUBE_TIMEOUT)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FetchError::SearchFailed(format!("YouTube search failed: {}", e)))?;

        res.text()
            .await
            .map_err(|e| FetchError::SearchFailed(format!("Unreadable YouTube response: {}", e)))
    }
}

#[async_trait]
impl VideoLocator for YoutubeScraper {
    fn name(&self) -> &'static str {
        "youtube-scraper"
    }

    async fn locate(&self, query: &str) -> Result<Option<String>, FetchError> {
        let html = self.fetch_results_page(query).await?;

        let Some(data) = extract::extract_initial_data(&html) else {
            tracing::warn!(
                bytes = html.len(),
                "no initial data found on YouTube results page; page layout may have changed"
            );
            return Ok(None);
        };

        let video_id = extract::first_video_id(&data);
        if video_id.is_none() {
            tracing::debug!(query, "initial data holds no video entries");
        }
        Ok(video_id)
    }
}
