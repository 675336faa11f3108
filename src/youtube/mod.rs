//! # YouTube Locator
//!
//! Finds a video for a free-text query. The pipeline only depends on the
//! [`VideoLocator`] trait, so the page scraper below can be swapped for an
//! API-backed search without touching anything else.
//!
//! [`YoutubeScraper`] reads the public search results page without any
//! credentials. The page embeds its results as a large JSON object assigned
//! to `ytInitialData`; [`extract`] pulls that object out of the HTML and
//! returns the first video entry in page order. The page format is not
//! versioned, so extraction is best effort.

pub mod extract;
mod search;

use async_trait::async_trait;

use crate::errors::FetchError;

pub use search::YoutubeScraper;

#[async_trait]
pub trait VideoLocator: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    /// Returns the id of the best video for `query`, or `None` when nothing
    /// matched.
    async fn locate(&self, query: &str) -> Result<Option<String>, FetchError>;
}
