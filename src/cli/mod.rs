//! # CLI Module
//!
//! User-facing commands of spot2yt. Each command loads what it needs from the
//! settings store, delegates the actual work to [`crate::pipeline`] or
//! [`crate::management`], and reports through the crate's output macros.
//!
//! ## Commands
//!
//! - [`convert`] - Resolves one Spotify track URL to a YouTube share link
//! - [`credentials`] - Shows or stores the Spotify API client id and secret
//! - [`settings`] - Toggles the auto mode flag or prints the config folder
//! - [`watch`] - Resolves every new track URL that appears on standard input
//!
//! ## Usage Patterns
//!
//! ```bash
//! spot2yt credentials --client-id abc --client-secret def
//! spot2yt convert https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC
//! wl-paste --watch cat | spot2yt watch
//! ```

mod convert;
mod credentials;
mod settings;
mod watch;

use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

use crate::{
    pipeline::FetchPipeline, spotify::SpotifyClient, types::Credentials,
    youtube::YoutubeScraper,
};

pub use convert::convert;
pub use credentials::credentials;
pub use settings::settings;
pub use watch::watch;

const CREDENTIALS_HINT: &str =
    "Tip: enter your Client ID/Secret with `spot2yt credentials --client-id <ID> --client-secret <SECRET>`.";

fn build_pipeline(credentials: Credentials) -> FetchPipeline {
    let http = Client::new();
    FetchPipeline::new(
        SpotifyClient::new(Some(http.clone())),
        Arc::new(YoutubeScraper::new(Some(http))),
        credentials,
    )
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
