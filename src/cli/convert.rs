use tabled::Table;

use super::{CREDENTIALS_HINT, build_pipeline, spinner};
use crate::{error, management::SettingsManager, success, types::ShareTableRow, warning};

/// Resolves a single Spotify track URL and prints the YouTube share link.
///
/// Prints a table with the track, the query that was sent to YouTube and the
/// resulting link. With `open` the link is also opened in the default
/// browser. Any failure terminates the program with exit code 1.
///
/// # Example Usage
///
/// ```bash
/// spot2yt convert https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC --open
/// ```
pub async fn convert(url: String, open: bool) {
    let pipeline = build_pipeline(SettingsManager::new().credentials().await);

    let pb = spinner("Looking up track on Spotify and YouTube...");
    let result = pipeline.run(&url).await;
    pb.finish_and_clear();

    let share = match result {
        Ok(share) => share,
        Err(e) => error!("{} [{}]\n\n{}", e, e.kind(), CREDENTIALS_HINT),
    };

    println!("{}", Table::new(vec![ShareTableRow::from(&share)]));
    success!("YouTube link: {}", share.url);

    if open && webbrowser::open(&share.url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            share.url
        );
    }
}
