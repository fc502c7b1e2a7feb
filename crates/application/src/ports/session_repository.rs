//! Session repository port
//!
//! Defines the interface for saving and restoring the open tabs.

use async_trait::async_trait;

use crate::session::TabSession;

/// Errors that can occur while loading or saving a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session file could not be parsed or written as JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The session file could not be read or written.
    #[error("File system error: {0}")]
    FileSystem(String),

    /// The session was written by a newer version.
    #[error("Schema version mismatch: expected {expected}, found {found}")]
    SchemaMismatch {
        /// Highest supported schema version.
        expected: u32,
        /// Version found in the file.
        found: u32,
    },
}

/// Repository trait for session persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Loads the saved session.
    ///
    /// # Returns
    /// `None` if no session was saved.
    ///
    /// # Errors
    /// Returns an error if the session exists but cannot be read.
    async fn load(&self) -> Result<Option<TabSession>, SessionError>;

    /// Saves a session, replacing any previous one.
    ///
    /// # Errors
    /// Returns an error if the session cannot be written.
    async fn save(&self, session: &TabSession) -> Result<(), SessionError>;

    /// Deletes the saved session, if any.
    ///
    /// # Errors
    /// Returns an error if an existing session cannot be removed.
    async fn clear(&self) -> Result<(), SessionError>;
}
