//! Restore session use case

use tabnav_domain::TabSettings;
use tracing::info;

use crate::error::ApplicationResult;
use crate::ports::SessionRepository;
use crate::store::Store;

/// Rebuilds the tab stores from the last saved session.
pub struct RestoreSession<R> {
    repository: R,
}

impl<R: SessionRepository> RestoreSession<R> {
    /// Creates a new `RestoreSession` use case.
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Executes the use case.
    ///
    /// Falls back to an empty store configured by `settings` when nothing
    /// was saved.
    ///
    /// # Errors
    /// Returns an error if a saved session exists but cannot be loaded.
    pub async fn execute(&self, settings: &TabSettings) -> ApplicationResult<Store> {
        let Some(session) = self.repository.load().await? else {
            info!("no saved session, starting empty");
            return Ok(Store::with_settings(settings));
        };

        info!(
            saved_at = %session.saved_at,
            tabs = session.tabs.tabs().len(),
            workspace_tabs = session.workspace_tabs.tabs().len(),
            "restoring tab session"
        );
        Ok(session.into_store(settings))
    }
}
