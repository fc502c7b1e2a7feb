//! User settings persistence in `settings.json`.

use std::io::ErrorKind;
use std::path::PathBuf;

use tabnav_domain::TabSettings;
use tokio::fs;

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

const SETTINGS_FILE: &str = "settings.json";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

/// Repository for user settings persistence.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    dir: PathBuf,
}

impl SettingsRepository {
    /// Creates a repository reading `<dir>/settings.json`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the path to the settings file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    /// Loads user settings from disk.
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<TabSettings, SettingsError> {
        match fs::read(self.path()).await {
            Ok(content) => Ok(from_json_bytes(&content)?),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(TabSettings::default()),
            Err(error) => Err(error.into()),
        }
    }

    /// Saves user settings to disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub async fn save(&self, settings: &TabSettings) -> Result<(), SettingsError> {
        fs::create_dir_all(&self.dir).await?;

        let content = to_json_stable_bytes(settings)?;
        fs::write(self.path(), content).await?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_returns_default_when_no_file() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let repo = SettingsRepository::new(temp.path());

        assert_eq!(repo.load().await.unwrap(), TabSettings::default());
    }

    #[tokio::test]
    async fn partial_file_fills_defaults() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let repo = SettingsRepository::new(temp.path());
        std::fs::write(repo.path(), r#"{"persist_session": false}"#).unwrap();

        let settings = repo.load().await.unwrap();
        assert_eq!(settings.history_limit, 20);
        assert!(!settings.persist_session);
    }

    #[tokio::test]
    async fn save_then_load() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let repo = SettingsRepository::new(temp.path().join("tabnav"));
        let settings = TabSettings {
            history_limit: 5,
            persist_session: false,
        };

        repo.save(&settings).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), settings);
    }
}
