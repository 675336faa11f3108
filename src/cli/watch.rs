use std::sync::Arc;

use tokio::{
    io::{AsyncBufReadExt, BufReader},
    task::JoinSet,
};

use super::{CREDENTIALS_HINT, build_pipeline};
use crate::{
    errors::FetchError,
    info,
    management::{FetchSession, SettingsManager},
    pipeline::FetchPipeline,
    success,
    types::ShareResult,
    utils, warning,
};

const RELOAD_COMMAND: &str = ":reload";

/// Resolves every new Spotify track URL that shows up on standard input.
///
/// Each line is searched for a track URL. A URL equal to the previous one is
/// ignored; a different URL starts a new lookup right away, and results of
/// lookups that were overtaken by a newer URL are dropped. With the auto mode
/// flag set, only the bare share links are printed so the output can be piped
/// straight into a clipboard tool.
///
/// A line reading `:reload` re-reads the settings file, so credentials saved
/// from another terminal apply to the next lookup. The last URL may then be
/// fed again to retry it.
///
/// # Example Usage
///
/// ```bash
/// wl-paste --watch cat | spot2yt watch | wl-copy
/// ```
pub async fn watch() {
    let manager = SettingsManager::new();
    let mut bare = manager.load().await.auto_clipboard;
    let pipeline = build_pipeline(manager.credentials().await);
    let session = Arc::new(FetchSession::new());
    let mut tasks = JoinSet::new();

    if !bare {
        info!("Watching standard input for Spotify track URLs...");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warning!("Failed to read input: {}", e);
                break;
            }
        };

        if line.trim() == RELOAD_COMMAND {
            bare = reload(&manager, &pipeline, &session).await;
            continue;
        }

        let Some(url) = utils::find_track_url(&line) else {
            continue;
        };

        let Some(ticket) = session.begin(url).await else {
            tracing::debug!(url, "already fetched, skipping");
            continue;
        };

        let pipeline = pipeline.clone();
        let session = Arc::clone(&session);
        tasks.spawn(async move {
            let result = pipeline.run(ticket.url()).await;
            if !session.is_current(&ticket).await {
                tracing::debug!(url = ticket.url(), "dropping result of superseded request");
                return;
            }
            report(ticket.url(), result, bare);
        });

        while tasks.try_join_next().is_some() {}
    }

    while tasks.join_next().await.is_some() {}
}

async fn reload(manager: &SettingsManager, pipeline: &FetchPipeline, session: &FetchSession) -> bool {
    let settings = manager.load().await;
    pipeline.set_credentials(manager.credentials().await).await;
    session.forget().await;

    if !settings.auto_clipboard {
        info!("Settings reloaded.");
    }
    tracing::debug!(auto_clipboard = settings.auto_clipboard, "reloaded settings");
    settings.auto_clipboard
}

fn report(url: &str, result: Result<ShareResult, FetchError>, bare: bool) {
    match result {
        Ok(share) if bare => println!("{}", share.url),
        Ok(share) => success!("{} -> {}", url, share.url),
        Err(e) => warning!("{}: {} [{}]\n{}", url, e, e.kind(), CREDENTIALS_HINT),
    }
}
