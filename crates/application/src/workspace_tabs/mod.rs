//! Workspace-level tabs: overview, environments, git and workspace requests.

mod command;
mod store;

pub use command::{DefaultWorkspaceTab, WorkspaceTabCommand};
pub use store::WorkspaceTabStore;
