use crate::{config, error, info, management::SettingsManager, success, utils, warning};

/// Shows or updates the stored Spotify API credentials.
///
/// Without arguments the stored client id and a masked secret are printed.
/// Otherwise the given values are trimmed and saved; a value that is not
/// given keeps its stored state, as does the auto mode flag.
pub async fn credentials(client_id: Option<String>, client_secret: Option<String>) {
    let manager = SettingsManager::new();
    let mut settings = manager.load().await;

    if client_id.is_none() && client_secret.is_none() {
        if settings.client_id.is_empty() && settings.client_secret.is_empty() {
            warning!("No credentials stored in {}", manager.path().display());
        } else {
            info!("Client ID: {}", settings.client_id);
            info!("Client Secret: {}", utils::mask_secret(&settings.client_secret));
        }
        if config::credentials_override().is_some() {
            info!("Credentials from the environment take precedence over the settings file.");
        }
        return;
    }

    if let Some(id) = client_id {
        settings.client_id = id.trim().to_string();
    }
    if let Some(secret) = client_secret {
        settings.client_secret = secret.trim().to_string();
    }

    if let Err(e) = manager.save(&settings).await {
        error!("Failed to save credentials: {}", e);
    }

    success!("Credentials saved.");
}
