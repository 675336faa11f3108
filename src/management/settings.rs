use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::{
    config,
    errors::SettingsError,
    types::{Credentials, Settings},
};

pub struct SettingsManager {
    path: PathBuf,
}

impl SettingsManager {
    pub fn new() -> Self {
        Self {
            path: Self::settings_path(),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the settings file. Any I/O or parse failure yields defaults, and
    /// each field that is missing or has the wrong type falls back on its own.
    pub async fn load(&self) -> Settings {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), "settings not readable: {}", e);
                return Settings::default();
            }
        };

        let value: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "ignoring malformed settings: {}", e);
                return Settings::default();
            }
        };

        let Some(fields) = value.as_object() else {
            tracing::warn!(path = %self.path.display(), "ignoring settings that are not a JSON object");
            return Settings::default();
        };

        Settings {
            client_id: string_field(fields, "client_id"),
            client_secret: string_field(fields, "client_secret"),
            auto_clipboard: fields.get("auto_clipboard").is_some_and(is_truthy),
        }
    }

    /// Credentials from the settings file, unless both are provided through
    /// the environment.
    pub async fn credentials(&self) -> Credentials {
        match config::credentials_override() {
            Some(credentials) => credentials,
            None => self.load().await.credentials(),
        }
    }

    /// Writes the settings as pretty JSON, owner read/write only where the
    /// platform allows it.
    pub async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(settings)?;

        #[cfg(unix)]
        {
            match self.write_restricted(json.as_bytes()).await {
                Ok(()) => return Ok(()),
                Err(e) => tracing::debug!("restricted write failed, falling back: {}", e),
            }
        }

        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    #[cfg(unix)]
    async fn write_restricted(&self, bytes: &[u8]) -> std::io::Result<()> {
        use async_fs::unix::OpenOptionsExt;
        use futures::AsyncWriteExt;

        let mut file = async_fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(&self.path)
            .await?;
        file.write_all(bytes).await?;
        file.flush().await
    }

    fn settings_path() -> PathBuf {
        config::app_dir().join(config::SETTINGS_FILE_NAME)
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Loose truthiness for hand-edited files: `1`, `"yes"` and `true` all enable
/// the flag, `null`, `0` and empty values do not.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}
