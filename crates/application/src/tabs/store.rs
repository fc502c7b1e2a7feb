//! The editor tab store.
//!
//! [`TabStore::apply`] is the only writer: every change to the open tabs,
//! the focused tab, the per-scope focus memory and the collection access
//! history goes through a [`TabCommand`]. Malformed commands (unknown uids,
//! out-of-range moves) leave the state untouched.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tabnav_domain::{CollectionAccessHistory, CollectionUid, OpenTab, SwitchDirection, Tab};
use tracing::{debug, warn};

use super::command::{Reorder, TabCommand, ViewChange};
use crate::ordering::move_item;

/// Open editor tabs and navigation memory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabStore {
    /// Open tabs in display order.
    tabs: Vec<Tab>,
    /// Focused tab; `None` shows the workspace home.
    active_tab_uid: Option<String>,
    /// Last focused tab per workspace.
    active_tab_uid_by_workspace: BTreeMap<String, String>,
    /// Last focused tab per collection.
    active_tab_uid_by_collection: BTreeMap<CollectionUid, String>,
    /// Visited collections, most recent last.
    collection_access_history: CollectionAccessHistory,
}

impl TabStore {
    /// Creates an empty store with the default history limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store remembering at most `limit` collections.
    #[must_use]
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            collection_access_history: CollectionAccessHistory::new(limit),
            ..Self::default()
        }
    }

    /// Applies a command to the store.
    pub fn apply(&mut self, command: TabCommand) {
        debug!(?command, "applying tab command");

        match command {
            TabCommand::AddTab(open) => self.add_tab(open),
            TabCommand::FocusTab { uid } => self.focus_tab(&uid),
            TabCommand::SwitchTab { direction } => self.switch_tab(direction),
            TabCommand::UpdateView { uid, change } => self.update_view(&uid, change),
            TabCommand::CloseTabs {
                tab_uids,
                workspace_uid,
            } => self.close_tabs(&tab_uids, workspace_uid.as_deref()),
            TabCommand::CloseAllCollectionTabs { collection_uid } => {
                self.close_all_collection_tabs(&collection_uid);
            }
            TabCommand::MakeTabPermanent { uid } => self.make_tab_permanent(&uid),
            TabCommand::ReorderTabs { placement } => self.reorder_tabs(placement),
            TabCommand::TriggerSaveTransientModal { uid } => {
                self.set_save_transient_modal(&uid, true);
            }
            TabCommand::ClearSaveTransientModal { uid } => {
                self.set_save_transient_modal(&uid, false);
            }
            TabCommand::SwitchWorkspaceContext {
                from_workspace_uid,
                to_workspace_uid,
            } => self.switch_workspace_context(from_workspace_uid.as_deref(), &to_workspace_uid),
            TabCommand::SwitchCollectionContext {
                from_collection_uid,
                to_collection_uid,
            } => self.switch_collection_context(from_collection_uid.as_ref(), &to_collection_uid),
        }
    }

    /// Applies a command and returns the resulting store.
    #[must_use]
    pub fn reduce(mut self, command: TabCommand) -> Self {
        self.apply(command);
        self
    }

    /// Returns the open tabs in display order.
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Returns the uid of the focused tab.
    #[must_use]
    pub fn active_tab_uid(&self) -> Option<&str> {
        self.active_tab_uid.as_deref()
    }

    /// Returns the tab last focused in a workspace.
    #[must_use]
    pub fn remembered_for_workspace(&self, workspace_uid: &str) -> Option<&str> {
        self.active_tab_uid_by_workspace
            .get(workspace_uid)
            .map(String::as_str)
    }

    /// Returns the tab last focused in a collection.
    #[must_use]
    pub fn remembered_for_collection(&self, collection_uid: &CollectionUid) -> Option<&str> {
        self.active_tab_uid_by_collection
            .get(collection_uid)
            .map(String::as_str)
    }

    /// Returns the collection access history.
    #[must_use]
    pub const fn collection_access_history(&self) -> &CollectionAccessHistory {
        &self.collection_access_history
    }

    /// Looks up an open tab.
    #[must_use]
    pub fn tab(&self, uid: &str) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.uid == uid)
    }

    /// Returns true if a tab with this uid is open.
    #[must_use]
    pub fn contains(&self, uid: &str) -> bool {
        self.tab(uid).is_some()
    }

    pub(super) fn index_of(&self, uid: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.uid == uid)
    }

    fn tab_mut(&mut self, uid: &str) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|tab| tab.uid == uid)
    }

    /// Focuses `uid` and remembers it for the given scopes.
    pub(super) fn remember_active(
        &mut self,
        uid: &str,
        workspace_uid: Option<&str>,
        collection_uid: Option<&CollectionUid>,
    ) {
        self.active_tab_uid = Some(uid.to_string());
        if let Some(workspace_uid) = workspace_uid {
            self.active_tab_uid_by_workspace
                .insert(workspace_uid.to_string(), uid.to_string());
        }
        if let Some(collection_uid) = collection_uid {
            self.active_tab_uid_by_collection
                .insert(collection_uid.clone(), uid.to_string());
        }
    }

    pub(super) fn record_access(&mut self, collection_uid: &CollectionUid) {
        self.collection_access_history.record(collection_uid);
    }

    pub(super) fn set_active(&mut self, uid: Option<String>) {
        self.active_tab_uid = uid;
    }

    pub(super) fn remember_for_workspace(&mut self, workspace_uid: &str, uid: Option<&str>) {
        match uid {
            Some(uid) => {
                self.active_tab_uid_by_workspace
                    .insert(workspace_uid.to_string(), uid.to_string());
            }
            None => {
                self.active_tab_uid_by_workspace.remove(workspace_uid);
            }
        }
    }

    pub(super) fn remember_for_collection(&mut self, collection_uid: &CollectionUid, uid: &str) {
        self.active_tab_uid_by_collection
            .insert(collection_uid.clone(), uid.to_string());
    }

    pub(super) fn retain_tabs(&mut self, keep: impl FnMut(&Tab) -> bool) {
        self.tabs.retain(keep);
    }

    fn add_tab(&mut self, open: OpenTab) {
        if self.contains(&open.uid) {
            self.active_tab_uid = Some(open.uid);
            return;
        }

        if open.tab_type.is_singleton() {
            let existing = self.tabs.iter().find(|tab| {
                tab.tab_type == open.tab_type && tab.in_collection(&open.collection_uid)
            });
            if let Some(existing) = existing {
                self.active_tab_uid = Some(existing.uid.clone());
                return;
            }
        }

        let tab = open.build_tab();
        let replaces_preview = self.tabs.last().is_some_and(|last| {
            last.preview
                && tab
                    .workspace_uid
                    .as_deref()
                    .is_some_and(|workspace_uid| last.in_workspace(workspace_uid))
        });

        if replaces_preview {
            if let Some(last) = self.tabs.last_mut() {
                debug!(replaced = %last.uid, uid = %tab.uid, "replacing preview tab");
                *last = tab;
            }
        } else if open.insert_first {
            self.tabs.insert(0, tab);
        } else {
            self.tabs.push(tab);
        }

        self.remember_active(
            &open.uid,
            open.workspace_uid.as_deref(),
            Some(&open.collection_uid),
        );
        self.record_access(&open.collection_uid);
    }

    fn focus_tab(&mut self, uid: &str) {
        let Some(tab) = self.tab(uid) else {
            debug!(uid, "ignoring focus of unknown tab");
            return;
        };

        let workspace_uid = tab.workspace_uid.clone();
        let collection_uid = tab.collection_uid.clone();

        self.remember_active(uid, workspace_uid.as_deref(), collection_uid.as_ref());
        if let Some(collection_uid) = collection_uid {
            self.record_access(&collection_uid);
        }
    }

    fn switch_tab(&mut self, direction: SwitchDirection) {
        let current = self
            .active_tab_uid
            .as_deref()
            .and_then(|uid| self.index_of(uid));

        self.active_tab_uid = direction
            .step(current, self.tabs.len())
            .and_then(|index| self.tabs.get(index))
            .map(|tab| tab.uid.clone());
    }

    fn update_view(&mut self, uid: &str, change: ViewChange) {
        let Some(tab) = self.tab_mut(uid) else {
            return;
        };

        match change {
            ViewChange::RequestPaneWidth(width) => tab.request_pane_width = width,
            ViewChange::RequestPaneHeight(height) => tab.request_pane_height = height,
            ViewChange::RequestPaneTab(pane) => tab.request_pane_tab = pane,
            ViewChange::ResponsePaneTab(pane) => tab.response_pane_tab = pane,
            ViewChange::ResponsePaneScrollPosition(y) => tab.response_pane_scroll_position = y,
            ViewChange::ResponseFormat(format) => tab.response_format = format,
            ViewChange::ResponseViewTab(view) => tab.response_view_tab = view,
        }
    }

    fn close_all_collection_tabs(&mut self, collection_uid: &CollectionUid) {
        self.tabs.retain(|tab| !tab.in_collection(collection_uid));
        self.active_tab_uid = None;
    }

    fn make_tab_permanent(&mut self, uid: &str) {
        match self.tab_mut(uid) {
            Some(tab) => tab.preview = false,
            None => warn!(uid, "cannot make tab permanent: tab not found"),
        }
    }

    fn reorder_tabs(&mut self, placement: Reorder) {
        let indices = match placement {
            Reorder::Step { direction } => self
                .active_tab_uid
                .as_deref()
                .and_then(|uid| self.index_of(uid))
                .and_then(|source| {
                    direction
                        .neighbour(source, self.tabs.len())
                        .map(|target| (source, target))
                }),
            Reorder::Onto {
                source_uid,
                target_uid,
            } => self.index_of(&source_uid).zip(self.index_of(&target_uid)),
        };

        let moved =
            indices.is_some_and(|(source, target)| move_item(&mut self.tabs, source, target));
        if !moved {
            debug!("ignoring reorder outside the tab bar");
        }
    }

    fn set_save_transient_modal(&mut self, uid: &str, show: bool) {
        if let Some(tab) = self.tab_mut(uid) {
            tab.show_save_transient_modal = show;
        }
    }

    /// Repairs a store loaded from disk.
    ///
    /// Drops duplicate tabs, transient dialog flags and references to tabs
    /// that are no longer open, then applies the history limit.
    pub(crate) fn sanitize(&mut self, history_limit: usize) {
        let mut seen = HashSet::new();
        self.tabs.retain(|tab| seen.insert(tab.uid.clone()));

        for tab in &mut self.tabs {
            tab.show_save_transient_modal = false;
        }

        let open: HashSet<String> = self.tabs.iter().map(|tab| tab.uid.clone()).collect();

        if self
            .active_tab_uid
            .as_ref()
            .is_some_and(|uid| !open.contains(uid))
        {
            self.active_tab_uid = None;
        }
        self.active_tab_uid_by_workspace
            .retain(|_, uid| open.contains(uid));
        self.active_tab_uid_by_collection
            .retain(|_, uid| open.contains(uid));
        self.collection_access_history.set_limit(history_limit);
    }
}
