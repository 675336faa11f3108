//! spot2yt library
//!
//! Converts Spotify track links into YouTube share links. The Spotify Web API
//! supplies title and artists of a track, an unauthenticated YouTube search
//! finds the first matching video, and the result is returned as a
//! `https://youtu.be/<id>` link.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `errors` - Failure kinds reported by the fetch pipeline
//! - `management` - Settings persistence and request deduplication
//! - `pipeline` - The URL to share link pipeline
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - URL parsing, query building and other helpers
//! - `youtube` - YouTube search and result extraction
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use spot2yt::{pipeline::FetchPipeline, spotify::SpotifyClient, types::Credentials, youtube::YoutubeScraper};
//!
//! #[tokio::main]
//! async fn main() {
//!     let pipeline = FetchPipeline::new(
//!         SpotifyClient::new(None),
//!         Arc::new(YoutubeScraper::new(None)),
//!         Credentials::new("client-id", "client-secret"),
//!     );
//!     match pipeline.run("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC").await {
//!         Ok(share) => println!("{}", share.url),
//!         Err(e) => eprintln!("{} [{}]", e, e.kind()),
//!     }
//! }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod management;
pub mod pipeline;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod youtube;

/// Prints an informational line prefixed with a blue `o`.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Config folder is here: {}", path.display());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line prefixed with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error line prefixed with a red `!` to stderr and exits with
/// status 1.
///
/// Only for failures the current command cannot continue from. The macro
/// diverges, so it can stand in any expression position:
///
/// ```
/// let share = match result {
///     Ok(share) => share,
///     Err(e) => error!("{} [{}]", e, e.kind()),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning line prefixed with a yellow `!` to stderr. Execution
/// continues.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
