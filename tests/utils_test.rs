use spot2yt::{
    errors::{FailureKind, FetchError},
    types::{ShareResult, ShareTableRow},
    utils::*,
};

#[test]
fn test_is_track_url() {
    assert!(is_track_url("https://open.spotify.com/track/abc123"));
    assert!(is_track_url("http://open.spotify.com/track/abc123"));
    assert!(is_track_url("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=xyz"));

    assert!(!is_track_url("https://open.spotify.com/track/"));
    assert!(!is_track_url("https://open.spotify.com/album/abc123"));
    assert!(!is_track_url("https://open.spotify.com/intl-de/track/abc123"));
    assert!(!is_track_url("https://openXspotify.com/track/abc123"));
    assert!(!is_track_url(" https://open.spotify.com/track/abc123"));
}

#[test]
fn test_find_track_url() {
    assert_eq!(
        find_track_url("listen: https://open.spotify.com/track/abc123?si=1 !"),
        Some("https://open.spotify.com/track/abc123")
    );
    assert_eq!(find_track_url("https://open.spotify.com/album/abc123"), None);
    assert_eq!(find_track_url(""), None);
}

#[test]
fn test_extract_track_id() {
    assert_eq!(
        extract_track_id("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=x"),
        Some("4uLU6hMCjMI75M1A2tKUQC")
    );
    assert_eq!(extract_track_id("https://open.spotify.com/album/abc"), None);
}

#[test]
fn test_build_query() {
    let artists = |names: &[&str]| names.iter().map(|n| n.to_string()).collect::<Vec<_>>();

    assert_eq!(build_query("Song", &artists(&["A", "B"])), "Song A & B");
    assert_eq!(build_query("Song", &artists(&["A"])), "Song A");
    assert_eq!(build_query("Song", &[]), "Song");
    assert_eq!(build_query("", &artists(&["A", "B"])), "A & B");
    assert_eq!(build_query("", &[]), "");
}

#[test]
fn test_share_url() {
    assert_eq!(share_url("dQw4w9WgXcQ"), "https://youtu.be/dQw4w9WgXcQ");
}

#[test]
fn test_fingerprint() {
    let fp = fingerprint("https://open.spotify.com/track/abc123");

    assert_eq!(fp.len(), 64);
    assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(fp, fingerprint(" https://open.spotify.com/track/abc123 "));
    assert_ne!(fp, fingerprint("https://open.spotify.com/track/abc124"));
}

#[test]
fn test_mask_secret() {
    assert_eq!(mask_secret(""), "");
    assert_eq!(mask_secret("short"), "•••••");
    assert_eq!(mask_secret("0123456789abcdef"), "••••••••••••cdef");
}

#[test]
fn test_failure_kind_labels() {
    let err = FetchError::LookupFailed("Spotify API did not return a track title.".to_string());

    assert_eq!(err.kind(), FailureKind::LookupFailed);
    assert_eq!(err.kind().to_string(), "lookup-failed");
    assert_eq!(err.to_string(), err.message());
    assert_eq!(FailureKind::NoMatch.to_string(), "no-match");
}

#[test]
fn test_share_table_row() {
    let share = ShareResult {
        url: "https://youtu.be/abc".to_string(),
        video_id: "abc".to_string(),
        title: "Song".to_string(),
        artists: vec!["A".to_string(), "B".to_string()],
        query: "Song A & B".to_string(),
    };

    let row = ShareTableRow::from(&share);
    assert_eq!(row.track, "Song - A & B");
    assert_eq!(row.link, "https://youtu.be/abc");

    let row = ShareTableRow::from(&ShareResult {
        artists: Vec::new(),
        ..share
    });
    assert_eq!(row.track, "Song");
}
