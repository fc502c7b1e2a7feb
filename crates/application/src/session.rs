//! Snapshot of the tab stores saved between runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabnav_domain::TabSettings;

use crate::store::Store;
use crate::tabs::TabStore;
use crate::workspace_tabs::WorkspaceTabStore;

/// Current version of the session file format.
pub const SESSION_SCHEMA_VERSION: u32 = 1;

/// The open tabs of both stores at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabSession {
    /// Format version, for forward compatibility.
    pub schema_version: u32,
    /// When the snapshot was taken.
    pub saved_at: DateTime<Utc>,
    /// Editor tabs.
    #[serde(default)]
    pub tabs: TabStore,
    /// Workspace tabs.
    #[serde(default)]
    pub workspace_tabs: WorkspaceTabStore,
}

impl TabSession {
    /// Takes a snapshot of `store`.
    #[must_use]
    pub fn capture(store: &Store) -> Self {
        Self {
            schema_version: SESSION_SCHEMA_VERSION,
            saved_at: Utc::now(),
            tabs: store.tabs().clone(),
            workspace_tabs: store.workspace_tabs().clone(),
        }
    }

    /// Rebuilds a store from the snapshot.
    ///
    /// Transient dialogs are dismissed, references to tabs that are no
    /// longer open are dropped and the history limit from `settings` is
    /// applied.
    #[must_use]
    pub fn into_store(self, settings: &TabSettings) -> Store {
        let Self {
            mut tabs,
            mut workspace_tabs,
            ..
        } = self;

        tabs.sanitize(settings.history_limit);
        workspace_tabs.sanitize();

        Store::from_parts(tabs, workspace_tabs)
    }
}
