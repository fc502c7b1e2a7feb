//! Tabnav Application - Tab reducers and session use cases
//!
//! This crate holds the two tab stores, the commands that drive them and
//! the selectors a tab bar renders from. It also snapshots the stores into a
//! [`TabSession`] and defines the [`ports::SessionRepository`] port that the
//! infrastructure layer implements.

pub mod error;
pub mod ports;
pub mod session;
pub mod store;
pub mod tabs;
pub mod use_cases;
pub mod workspace_tabs;

mod ordering;

pub use error::{ApplicationError, ApplicationResult};
pub use session::{SESSION_SCHEMA_VERSION, TabSession};
pub use store::{Action, Store};
pub use tabs::{OpenedCollection, Reorder, TabCommand, TabStore, ViewChange};
pub use workspace_tabs::{DefaultWorkspaceTab, WorkspaceTabCommand, WorkspaceTabStore};
