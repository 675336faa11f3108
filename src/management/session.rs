use tokio::sync::Mutex;

use crate::utils;

/// Proof that a request was started. Compared against the session to decide
/// whether its result is still wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    url: String,
    fingerprint: String,
}

impl Ticket {
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Tracks the most recent request so that repeated input does not trigger a
/// second fetch and late results for superseded URLs can be dropped.
#[derive(Default)]
pub struct FetchSession {
    latest: Mutex<Option<String>>,
}

impl FetchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request for `url`, or returns `None` if the same URL is
    /// already in flight or was the last one completed.
    pub async fn begin(&self, url: &str) -> Option<Ticket> {
        let fingerprint = utils::fingerprint(url);
        let mut latest = self.latest.lock().await;
        if latest.as_deref() == Some(fingerprint.as_str()) {
            return None;
        }

        *latest = Some(fingerprint.clone());
        Some(Ticket {
            url: url.trim().to_string(),
            fingerprint,
        })
    }

    pub async fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.lock().await.as_deref() == Some(ticket.fingerprint.as_str())
    }

    /// Clears the record so the last URL can be fetched again.
    pub async fn forget(&self) {
        *self.latest.lock().await = None;
    }
}
