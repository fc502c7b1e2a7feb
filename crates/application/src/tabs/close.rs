//! Closing tabs and choosing what to focus next.

use std::collections::HashSet;

use tabnav_domain::{CollectionUid, Tab};
use tracing::debug;

use super::store::TabStore;

impl TabStore {
    pub(super) fn close_tabs(&mut self, tab_uids: &[String], workspace_uid: Option<&str>) {
        let closed_active = self.active_tab().cloned();

        self.retain_tabs(|tab| !tab_uids.contains(&tab.uid));

        if self.tabs().is_empty() {
            self.set_active(None);
            return;
        }

        let Some(closed) = closed_active else {
            return;
        };
        if self.contains(&closed.uid) {
            return;
        }

        let workspace_to_use = workspace_uid
            .map(str::to_string)
            .or_else(|| closed.workspace_uid.clone());
        let next = self.fallback_focus(&closed, workspace_to_use.as_deref());
        debug!(closed = %closed.uid, next = ?next, "focus moved after close");

        self.set_active(next.clone());

        let Some(workspace_uid) = workspace_to_use else {
            return;
        };
        self.remember_for_workspace(&workspace_uid, next.as_deref());

        let next_collection = next
            .as_deref()
            .and_then(|uid| self.tab(uid))
            .and_then(|tab| tab.collection_uid.clone());
        if let (Some(uid), Some(collection_uid)) = (next.as_deref(), next_collection) {
            self.remember_for_collection(&collection_uid, uid);
        }
    }

    /// Picks the tab to focus after `closed`, the focused tab, was closed.
    ///
    /// Order of preference: the last remaining tab of the same collection,
    /// then (for real collections only) the most recently visited other
    /// collection that still has tabs, then the last tab of the workspace.
    fn fallback_focus(&self, closed: &Tab, workspace_uid: Option<&str>) -> Option<String> {
        let candidates: Vec<&Tab> = self
            .tabs()
            .iter()
            .filter(|tab| {
                workspace_uid.is_none_or(|workspace_uid| tab.in_workspace(workspace_uid))
            })
            .collect();

        let collection_uid = closed.collection_uid.as_ref();

        if let Some(sibling) = candidates
            .iter()
            .rev()
            .find(|tab| tab.collection_uid.as_ref() == collection_uid)
        {
            return Some(sibling.uid.clone());
        }

        // The workspace home never borrows another collection's tab.
        if collection_uid.is_some_and(CollectionUid::is_workspace_home) {
            return None;
        }

        if let Some(previous) = self.previous_collection(&candidates, collection_uid) {
            let previous_tabs: Vec<&Tab> = candidates
                .iter()
                .copied()
                .filter(|tab| tab.in_collection(previous))
                .collect();

            let remembered = self
                .remembered_for_collection(previous)
                .filter(|uid| previous_tabs.iter().any(|tab| tab.uid == *uid));
            if let Some(uid) = remembered {
                return Some(uid.to_string());
            }
            if let Some(last) = previous_tabs.last() {
                return Some(last.uid.clone());
            }
        }

        candidates.last().map(|tab| tab.uid.clone())
    }

    /// Most recently visited collection, other than `closed`, with open candidates.
    fn previous_collection<'a>(
        &'a self,
        candidates: &[&Tab],
        closed: Option<&CollectionUid>,
    ) -> Option<&'a CollectionUid> {
        let with_tabs: HashSet<&CollectionUid> = candidates
            .iter()
            .filter_map(|tab| tab.collection_uid.as_ref())
            .collect();

        self.collection_access_history()
            .most_recent_first()
            .find(|uid| Some(*uid) != closed && with_tabs.contains(uid))
    }
}
