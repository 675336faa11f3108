use crate::{error, info, management::SettingsManager, success};

pub async fn settings(auto_clipboard: Option<bool>, path: bool) {
    let manager = SettingsManager::new();

    if path {
        let Some(folder) = manager.path().parent() else {
            error!("Cannot determine config folder for {}", manager.path().display());
        };
        if let Err(e) = async_fs::create_dir_all(folder).await {
            error!("Failed to create config folder {}: {}", folder.display(), e);
        }
        info!("Config folder is here: {}", folder.display());
        return;
    }

    let mut settings = manager.load().await;

    match auto_clipboard {
        Some(enabled) => {
            settings.auto_clipboard = enabled;
            if let Err(e) = manager.save(&settings).await {
                error!("Failed to save settings: {}", e);
            }
            success!(
                "Auto mode {}.",
                if enabled { "enabled" } else { "disabled" }
            );
        }
        None => {
            info!("Settings file: {}", manager.path().display());
            info!("Credentials stored: {}", settings.credentials().is_complete());
            info!("Auto mode: {}", settings.auto_clipboard);
        }
    }
}
