//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while parsing or validating tab data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier is invalid or empty.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A tab type string does not name a known editor tab type.
    #[error("unknown tab type: {0}")]
    UnknownTabType(String),

    /// A workspace tab type string does not name a known workspace tab type.
    #[error("unknown workspace tab type: {0}")]
    UnknownWorkspaceTabType(String),

    /// A navigation direction string is not `pageup` or `pagedown`.
    #[error("invalid direction: {0}")]
    InvalidDirection(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
