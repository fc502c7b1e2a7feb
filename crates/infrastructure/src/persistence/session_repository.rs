//! Session persistence in `session.json`.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tabnav_application::ports::{SessionError, SessionRepository};
use tabnav_application::{SESSION_SCHEMA_VERSION, TabSession};
use tokio::fs;
use tracing::{debug, info};

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

const SESSION_FILE: &str = "session.json";

/// Just the version field, read before the full session.
#[derive(Deserialize)]
struct SessionHeader {
    schema_version: u32,
}

/// Stores the tab session as a JSON file in a directory.
#[derive(Debug, Clone)]
pub struct FileSessionRepository {
    dir: PathBuf,
}

impl FileSessionRepository {
    /// Creates a repository writing to `<dir>/session.json`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the path of the session file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }
}

fn file_system(error: &std::io::Error) -> SessionError {
    SessionError::FileSystem(error.to_string())
}

#[async_trait]
impl SessionRepository for FileSessionRepository {
    async fn load(&self) -> Result<Option<TabSession>, SessionError> {
        let path = self.path();

        let content = match fs::read(&path).await {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no session file");
                return Ok(None);
            }
            Err(error) => return Err(file_system(&error)),
        };

        let header: SessionHeader = from_json_bytes(&content)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;
        if header.schema_version > SESSION_SCHEMA_VERSION {
            return Err(SessionError::SchemaMismatch {
                expected: SESSION_SCHEMA_VERSION,
                found: header.schema_version,
            });
        }

        let session: TabSession = from_json_bytes(&content)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;

        info!(path = %path.display(), "loaded tab session");
        Ok(Some(session))
    }

    async fn save(&self, session: &TabSession) -> Result<(), SessionError> {
        let content = to_json_stable_bytes(session)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| file_system(&e))?;

        let path = self.path();
        fs::write(&path, content)
            .await
            .map_err(|e| file_system(&e))?;

        debug!(path = %path.display(), "wrote tab session");
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(self.path()).await {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(file_system(&error)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tabnav_application::{Store, TabCommand, WorkspaceTabCommand};
    use tabnav_domain::{CollectionUid, OpenTab, TabType, WorkspaceTabType};
    use tempfile::TempDir;

    fn sample_store() -> Store {
        let mut store = Store::new();
        store.dispatch(TabCommand::from(
            OpenTab::new("t1", CollectionUid::workspace_home("w1"), TabType::HttpRequest)
                .in_workspace("w1"),
        ));
        store.dispatch(WorkspaceTabCommand::SetActiveWorkspaceTab {
            workspace_uid: "w1".to_string(),
            tab_type: WorkspaceTabType::Overview,
        });
        store
    }

    #[tokio::test]
    async fn missing_file_loads_nothing() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let repo = FileSessionRepository::new(temp.path());

        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let repo = FileSessionRepository::new(temp.path().join("nested"));
        let session = TabSession::capture(&sample_store());

        repo.save(&session).await.unwrap();
        let loaded = repo.load().await.unwrap().expect("session should exist");

        assert_eq!(loaded, session);
        let text = std::fs::read_to_string(repo.path()).unwrap();
        assert!(text.ends_with('\n'));
        assert!(text.contains("\"collection_uid\": \"virtual-w1\""));
    }

    #[tokio::test]
    async fn newer_schema_is_rejected() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let repo = FileSessionRepository::new(temp.path());
        std::fs::write(
            repo.path(),
            r#"{"schema_version": 99, "saved_at": "2025-01-01T00:00:00Z", "layout": []}"#,
        )
        .unwrap();

        let result = repo.load().await;
        assert!(matches!(
            result,
            Err(SessionError::SchemaMismatch {
                expected: SESSION_SCHEMA_VERSION,
                found: 99
            })
        ));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let repo = FileSessionRepository::new(temp.path());
        std::fs::write(repo.path(), "not json").unwrap();

        assert!(matches!(
            repo.load().await,
            Err(SessionError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn clear_removes_file_and_tolerates_absence() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let repo = FileSessionRepository::new(temp.path());
        repo.save(&TabSession::capture(&sample_store())).await.unwrap();

        repo.clear().await.unwrap();
        assert!(!repo.path().exists());
        repo.clear().await.unwrap();
    }
}
