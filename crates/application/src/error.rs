//! Application error types

use thiserror::Error;
use tabnav_domain::DomainError;

use crate::ports::SessionError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Loading or saving the tab session failed.
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
