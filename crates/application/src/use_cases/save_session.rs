//! Save session use case

use tracing::info;

use crate::error::ApplicationResult;
use crate::ports::SessionRepository;
use crate::session::TabSession;
use crate::store::Store;

/// Writes a snapshot of the tab stores.
pub struct SaveSession<R> {
    repository: R,
}

impl<R: SessionRepository> SaveSession<R> {
    /// Creates a new `SaveSession` use case.
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Executes the use case and returns the snapshot that was written.
    ///
    /// # Errors
    /// Returns an error if the session cannot be written.
    pub async fn execute(&self, store: &Store) -> ApplicationResult<TabSession> {
        let session = TabSession::capture(store);
        self.repository.save(&session).await?;

        info!(tabs = session.tabs.tabs().len(), "saved tab session");
        Ok(session)
    }
}
