//! Failure taxonomy shared by every stage of the fetch pipeline.
//!
//! A pipeline run ends either with a complete [`crate::types::ShareResult`] or
//! with exactly one [`FetchError`]. Callers branch on [`FetchError::kind`]
//! instead of inspecting message text.

use std::fmt;

use thiserror::Error;

/// The closed set of reasons a pipeline run can stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The input is not a Spotify track URL.
    InvalidInput,
    /// Credentials are missing or were rejected by the token endpoint.
    AuthFailed,
    /// Track metadata could not be fetched or has no title.
    LookupFailed,
    /// The YouTube search request itself failed.
    SearchFailed,
    /// The search page was read but no video entry was found in it.
    NoMatch,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureKind::InvalidInput => "invalid-input",
            FailureKind::AuthFailed => "auth-failed",
            FailureKind::LookupFailed => "lookup-failed",
            FailureKind::SearchFailed => "search-failed",
            FailureKind::NoMatch => "no-match",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    AuthFailed(String),
    #[error("{0}")]
    LookupFailed(String),
    #[error("{0}")]
    SearchFailed(String),
    #[error("{0}")]
    NoMatch(String),
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::InvalidInput(_) => FailureKind::InvalidInput,
            FetchError::AuthFailed(_) => FailureKind::AuthFailed,
            FetchError::LookupFailed(_) => FailureKind::LookupFailed,
            FetchError::SearchFailed(_) => FailureKind::SearchFailed,
            FetchError::NoMatch(_) => FailureKind::NoMatch,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            FetchError::InvalidInput(msg)
            | FetchError::AuthFailed(msg)
            | FetchError::LookupFailed(msg)
            | FetchError::SearchFailed(msg)
            | FetchError::NoMatch(msg) => msg,
        }
    }
}

/// Errors raised while persisting settings. Loading never fails.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}
