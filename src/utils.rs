use std::sync::LazyLock;

use regex::Regex;
use sha2::{Digest, Sha256};

const SHARE_URL_PREFIX: &str = "https://youtu.be/";

static TRACK_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://open\.spotify\.com/track/[A-Za-z0-9]+").expect("valid track url regex")
});

static TRACK_URL_ANYWHERE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://open\.spotify\.com/track/[A-Za-z0-9]+").expect("valid track url regex")
});

static TRACK_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/track/([A-Za-z0-9]+)").expect("valid track id regex"));

/// Whether `input` starts with a Spotify track URL. Trailing query strings
/// such as `?si=...` are allowed.
pub fn is_track_url(input: &str) -> bool {
    TRACK_URL.is_match(input)
}

/// Finds the first Spotify track URL anywhere in `text`, without any trailing
/// query string.
pub fn find_track_url(text: &str) -> Option<&str> {
    TRACK_URL_ANYWHERE.find(text).map(|m| m.as_str())
}

pub fn extract_track_id(url: &str) -> Option<&str> {
    TRACK_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Builds the YouTube search query from a title and its artists.
///
/// `"{title} {a} & {b}"` when both parts are present, otherwise whichever part
/// is non-empty.
pub fn build_query(title: &str, artists: &[String]) -> String {
    let artist = artists.join(" & ");
    match (title.is_empty(), artist.is_empty()) {
        (false, false) => format!("{} {}", title, artist).trim().to_string(),
        (false, true) => title.to_string(),
        _ => artist,
    }
}

pub fn share_url(video_id: &str) -> String {
    format!("{}{}", SHARE_URL_PREFIX, video_id)
}

/// Hex encoded SHA-256 of the trimmed URL.
pub fn fingerprint(url: &str) -> String {
    Sha256::digest(url.trim().as_bytes())
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Masks all but the last four characters of a secret for display.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count == 0 {
        return String::new();
    }

    let visible = if count > 8 { 4 } else { 0 };
    let tail: String = secret.chars().skip(count - visible).collect();
    format!("{}{}", "•".repeat(count - visible), tail)
}
