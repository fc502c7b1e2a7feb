//! The combined store owned by the application shell.

use serde::{Deserialize, Serialize};
use tabnav_domain::TabSettings;

use crate::tabs::{TabCommand, TabStore};
use crate::workspace_tabs::{WorkspaceTabCommand, WorkspaceTabStore};

/// A command addressed to one of the stores.
///
/// Serialized as `{"store": "tabs", "command": {"action": "add_tab", ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "store", content = "command", rename_all = "snake_case")]
pub enum Action {
    /// Editor tab command.
    Tabs(TabCommand),
    /// Workspace tab command.
    WorkspaceTabs(WorkspaceTabCommand),
}

impl From<TabCommand> for Action {
    fn from(command: TabCommand) -> Self {
        Self::Tabs(command)
    }
}

impl From<WorkspaceTabCommand> for Action {
    fn from(command: WorkspaceTabCommand) -> Self {
        Self::WorkspaceTabs(command)
    }
}

/// Editor tabs and workspace tabs together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    tabs: TabStore,
    workspace_tabs: WorkspaceTabStore,
}

impl Store {
    /// Creates an empty store with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store configured by `settings`.
    #[must_use]
    pub fn with_settings(settings: &TabSettings) -> Self {
        Self {
            tabs: TabStore::with_history_limit(settings.history_limit),
            workspace_tabs: WorkspaceTabStore::new(),
        }
    }

    pub(crate) const fn from_parts(tabs: TabStore, workspace_tabs: WorkspaceTabStore) -> Self {
        Self {
            tabs,
            workspace_tabs,
        }
    }

    /// Routes an action to the store it addresses.
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        match action.into() {
            Action::Tabs(command) => self.tabs.apply(command),
            Action::WorkspaceTabs(command) => self.workspace_tabs.apply(command),
        }
    }

    /// Returns the editor tab store.
    #[must_use]
    pub const fn tabs(&self) -> &TabStore {
        &self.tabs
    }

    /// Returns the workspace tab store.
    #[must_use]
    pub const fn workspace_tabs(&self) -> &WorkspaceTabStore {
        &self.workspace_tabs
    }
}
