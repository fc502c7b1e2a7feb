//! Commands accepted by the workspace tab store.

use serde::{Deserialize, Serialize};
use tabnav_domain::{CollectionUid, WorkspaceTabType};

/// A state transition of the [`WorkspaceTabStore`](super::WorkspaceTabStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum WorkspaceTabCommand {
    /// Opens a workspace tab, or focuses the workspace's tab of that type.
    AddWorkspaceTab {
        /// Uid of the new tab.
        uid: String,
        /// Owning workspace.
        workspace_uid: String,
        /// What the tab shows.
        #[serde(rename = "type")]
        tab_type: WorkspaceTabType,
        /// Tab bar text.
        label: String,
        /// Whether the tab can be closed.
        #[serde(default)]
        permanent: bool,
    },

    /// Focuses an open workspace tab.
    FocusWorkspaceTab {
        /// Tab to focus.
        uid: String,
    },

    /// Closes one workspace tab.
    CloseWorkspaceTab {
        /// Tab to close.
        uid: String,
    },

    /// Closes several workspace tabs.
    CloseWorkspaceTabs {
        /// Tabs to close.
        #[serde(default)]
        tab_uids: Vec<String>,
    },

    /// Closes every tab of a workspace, or every tab when no workspace is given.
    CloseAllWorkspaceTabs {
        /// Workspace whose tabs are closed.
        #[serde(default)]
        workspace_uid: Option<String>,
    },

    /// Moves `source_uid` to the slot held by `target_uid`.
    ReorderWorkspaceTabs {
        /// Tab being dragged.
        source_uid: String,
        /// Tab it is dropped on.
        target_uid: String,
    },

    /// Seeds a workspace with its default tabs the first time it is opened.
    InitializeWorkspaceTabs {
        /// Workspace being opened.
        workspace_uid: String,
        /// Tabs to create when the workspace has none.
        #[serde(default)]
        default_tabs: Vec<DefaultWorkspaceTab>,
    },

    /// Focuses the workspace's tab of a type, creating it if needed.
    SetActiveWorkspaceTab {
        /// Workspace owning the tab.
        workspace_uid: String,
        /// Tab type to show.
        #[serde(rename = "type")]
        tab_type: WorkspaceTabType,
    },

    /// Opens a request item directly under a workspace.
    AddRequestTab {
        /// Owning workspace.
        workspace_uid: String,
        /// Request item shown by the tab.
        item_uid: String,
        /// Collection of the item.
        #[serde(default)]
        collection_uid: Option<CollectionUid>,
        /// Request kind.
        #[serde(rename = "type", default = "default_request_type")]
        tab_type: WorkspaceTabType,
        /// Tab bar text.
        #[serde(default = "default_request_label")]
        label: String,
    },

    /// Renames the tab showing a request item.
    UpdateRequestTabLabel {
        /// Request item that was renamed.
        item_uid: String,
        /// New tab bar text.
        label: String,
    },
}

/// A tab created by [`WorkspaceTabCommand::InitializeWorkspaceTabs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultWorkspaceTab {
    /// What the tab shows.
    #[serde(rename = "type")]
    pub tab_type: WorkspaceTabType,
    /// Tab bar text; the type's default label when absent.
    #[serde(default)]
    pub label: Option<String>,
}

impl DefaultWorkspaceTab {
    /// A default tab with the type's own label.
    #[must_use]
    pub const fn of(tab_type: WorkspaceTabType) -> Self {
        Self {
            tab_type,
            label: None,
        }
    }

    pub(super) fn label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.tab_type.default_label().to_string())
    }
}

const fn default_request_type() -> WorkspaceTabType {
    WorkspaceTabType::HttpRequest
}

fn default_request_label() -> String {
    "Untitled".to_string()
}
