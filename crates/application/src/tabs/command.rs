//! Commands accepted by the editor tab store.

use serde::{Deserialize, Serialize};
use tabnav_domain::{CollectionUid, MoveDirection, OpenTab, SwitchDirection};

/// A state transition of the [`TabStore`](super::TabStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TabCommand {
    /// Opens a tab, or focuses it if it is already open.
    AddTab(OpenTab),

    /// Focuses an open tab.
    FocusTab {
        /// Tab to focus.
        uid: String,
    },

    /// Moves focus to the previous or next tab, wrapping around.
    SwitchTab {
        /// Direction of the move.
        direction: SwitchDirection,
    },

    /// Changes one piece of a tab's view state.
    UpdateView {
        /// Tab to update.
        uid: String,
        /// The change to apply.
        change: ViewChange,
    },

    /// Closes tabs and picks a new focus if the focused tab was closed.
    CloseTabs {
        /// Tabs to close.
        tab_uids: Vec<String>,
        /// Workspace to search for a replacement focus.
        #[serde(default)]
        workspace_uid: Option<String>,
    },

    /// Closes every tab of a collection and clears the focus.
    CloseAllCollectionTabs {
        /// Collection whose tabs are closed.
        collection_uid: CollectionUid,
    },

    /// Turns a preview tab into a regular tab.
    MakeTabPermanent {
        /// Tab to keep.
        uid: String,
    },

    /// Moves a tab to another slot of the tab bar.
    ReorderTabs {
        /// Where the tab goes.
        placement: Reorder,
    },

    /// Requests the "save transient request" dialog for a tab.
    TriggerSaveTransientModal {
        /// Tab showing the dialog.
        uid: String,
    },

    /// Dismisses the "save transient request" dialog of a tab.
    ClearSaveTransientModal {
        /// Tab showing the dialog.
        uid: String,
    },

    /// Leaves one workspace for another, restoring its last focused tab.
    SwitchWorkspaceContext {
        /// Workspace being left.
        #[serde(default)]
        from_workspace_uid: Option<String>,
        /// Workspace being entered.
        to_workspace_uid: String,
    },

    /// Leaves one collection for another, restoring its last focused tab.
    SwitchCollectionContext {
        /// Collection being left.
        #[serde(default)]
        from_collection_uid: Option<CollectionUid>,
        /// Collection being entered.
        to_collection_uid: CollectionUid,
    },
}

impl TabCommand {
    /// Shorthand for [`TabCommand::FocusTab`].
    #[must_use]
    pub fn focus(uid: impl Into<String>) -> Self {
        Self::FocusTab { uid: uid.into() }
    }

    /// Shorthand for [`TabCommand::CloseTabs`] without a workspace hint.
    #[must_use]
    pub fn close<I, S>(tab_uids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::CloseTabs {
            tab_uids: tab_uids.into_iter().map(Into::into).collect(),
            workspace_uid: None,
        }
    }

    /// Shorthand for [`TabCommand::ReorderTabs`] dropping `source` onto `target`.
    #[must_use]
    pub fn move_onto(source_uid: impl Into<String>, target_uid: impl Into<String>) -> Self {
        Self::ReorderTabs {
            placement: Reorder::Onto {
                source_uid: source_uid.into(),
                target_uid: target_uid.into(),
            },
        }
    }
}

impl From<OpenTab> for TabCommand {
    fn from(open: OpenTab) -> Self {
        Self::AddTab(open)
    }
}

/// One view-state field of a tab and its new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewChange {
    /// Request pane width.
    RequestPaneWidth(Option<f64>),
    /// Request pane height.
    RequestPaneHeight(Option<f64>),
    /// Selected request pane.
    RequestPaneTab(String),
    /// Selected response pane.
    ResponsePaneTab(String),
    /// Response pane scroll offset.
    ResponsePaneScrollPosition(Option<f64>),
    /// Response body format override.
    ResponseFormat(Option<String>),
    /// Response view mode override.
    ResponseViewTab(Option<String>),
}

/// Target of a tab reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Reorder {
    /// Moves the focused tab one slot.
    Step {
        /// Direction of the move.
        direction: MoveDirection,
    },
    /// Moves `source_uid` to the slot currently held by `target_uid`.
    Onto {
        /// Tab being dragged.
        source_uid: String,
        /// Tab it is dropped on.
        target_uid: String,
    },
}
