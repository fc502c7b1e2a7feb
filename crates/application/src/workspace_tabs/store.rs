//! The workspace tab store.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tabnav_domain::{CollectionUid, WorkspaceTab, WorkspaceTabType, generate_id};
use tracing::debug;

use super::command::{DefaultWorkspaceTab, WorkspaceTabCommand};
use crate::ordering::move_item;

/// Open workspace tabs and the focused one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceTabStore {
    tabs: Vec<WorkspaceTab>,
    active_tab_uid: Option<String>,
}

impl WorkspaceTabStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a command to the store.
    pub fn apply(&mut self, command: WorkspaceTabCommand) {
        debug!(?command, "applying workspace tab command");

        match command {
            WorkspaceTabCommand::AddWorkspaceTab {
                uid,
                workspace_uid,
                tab_type,
                label,
                permanent,
            } => {
                let mut tab = WorkspaceTab::new(uid, workspace_uid, tab_type, label);
                tab.permanent = permanent;
                self.add_workspace_tab(tab);
            }
            WorkspaceTabCommand::FocusWorkspaceTab { uid } => self.focus(&uid),
            WorkspaceTabCommand::CloseWorkspaceTab { uid } => {
                self.close(|tab| tab.uid == uid);
            }
            WorkspaceTabCommand::CloseWorkspaceTabs { tab_uids } => {
                self.close(|tab| tab_uids.contains(&tab.uid));
            }
            WorkspaceTabCommand::CloseAllWorkspaceTabs { workspace_uid } => {
                self.close(|tab| {
                    workspace_uid
                        .as_ref()
                        .is_none_or(|workspace_uid| tab.workspace_uid == *workspace_uid)
                });
            }
            WorkspaceTabCommand::ReorderWorkspaceTabs {
                source_uid,
                target_uid,
            } => self.reorder(&source_uid, &target_uid),
            WorkspaceTabCommand::InitializeWorkspaceTabs {
                workspace_uid,
                default_tabs,
            } => self.initialize(&workspace_uid, &default_tabs),
            WorkspaceTabCommand::SetActiveWorkspaceTab {
                workspace_uid,
                tab_type,
            } => self.set_active_tab(&workspace_uid, tab_type),
            WorkspaceTabCommand::AddRequestTab {
                workspace_uid,
                item_uid,
                collection_uid,
                tab_type,
                label,
            } => self.add_request_tab(workspace_uid, item_uid, collection_uid, tab_type, label),
            WorkspaceTabCommand::UpdateRequestTabLabel { item_uid, label } => {
                if let Some(tab) = self
                    .tabs
                    .iter_mut()
                    .find(|tab| tab.item_uid.as_deref() == Some(item_uid.as_str()))
                {
                    tab.label = label;
                }
            }
        }
    }

    /// Applies a command and returns the resulting store.
    #[must_use]
    pub fn reduce(mut self, command: WorkspaceTabCommand) -> Self {
        self.apply(command);
        self
    }

    /// Returns the open workspace tabs in display order.
    #[must_use]
    pub fn tabs(&self) -> &[WorkspaceTab] {
        &self.tabs
    }

    /// Returns the uid of the focused workspace tab.
    #[must_use]
    pub fn active_tab_uid(&self) -> Option<&str> {
        self.active_tab_uid.as_deref()
    }

    /// Returns the focused workspace tab.
    #[must_use]
    pub fn active_tab(&self) -> Option<&WorkspaceTab> {
        self.active_tab_uid().and_then(|uid| self.tab(uid))
    }

    /// Looks up an open workspace tab.
    #[must_use]
    pub fn tab(&self, uid: &str) -> Option<&WorkspaceTab> {
        self.tabs.iter().find(|tab| tab.uid == uid)
    }

    /// Returns the tabs of one workspace, in display order.
    pub fn workspace_tabs<'a>(
        &'a self,
        workspace_uid: &str,
    ) -> impl Iterator<Item = &'a WorkspaceTab> {
        self.tabs
            .iter()
            .filter(move |tab| tab.workspace_uid == workspace_uid)
    }

    fn find_typed(
        &self,
        workspace_uid: &str,
        tab_type: WorkspaceTabType,
    ) -> Option<&WorkspaceTab> {
        self.tabs
            .iter()
            .find(|tab| tab.workspace_uid == workspace_uid && tab.tab_type == tab_type)
    }

    fn add_workspace_tab(&mut self, tab: WorkspaceTab) {
        let existing = self
            .tab(&tab.uid)
            .or_else(|| self.find_typed(&tab.workspace_uid, tab.tab_type))
            .map(|existing| existing.uid.clone());
        if let Some(uid) = existing {
            self.active_tab_uid = Some(uid);
            return;
        }

        self.active_tab_uid = Some(tab.uid.clone());
        self.tabs.push(tab);
    }

    fn focus(&mut self, uid: &str) {
        if self.tab(uid).is_some() {
            self.active_tab_uid = Some(uid.to_string());
        } else {
            debug!(uid, "ignoring focus of unknown workspace tab");
        }
    }

    /// Removes matching tabs; a removed focus moves to the last tab left.
    fn close(&mut self, remove: impl Fn(&WorkspaceTab) -> bool) {
        self.tabs.retain(|tab| !remove(tab));

        let active_open = self
            .active_tab_uid
            .as_deref()
            .is_some_and(|uid| self.tab(uid).is_some());
        if !active_open {
            self.active_tab_uid = self.tabs.last().map(|tab| tab.uid.clone());
        }
    }

    fn reorder(&mut self, source_uid: &str, target_uid: &str) {
        let source = self.tabs.iter().position(|tab| tab.uid == source_uid);
        let target = self.tabs.iter().position(|tab| tab.uid == target_uid);

        let moved = source
            .zip(target)
            .is_some_and(|(source, target)| move_item(&mut self.tabs, source, target));
        if !moved {
            debug!(source_uid, target_uid, "ignoring workspace tab reorder");
        }
    }

    fn initialize(&mut self, workspace_uid: &str, default_tabs: &[DefaultWorkspaceTab]) {
        if self.workspace_tabs(workspace_uid).next().is_none() {
            let mut seeded = HashSet::new();
            for default in default_tabs {
                if !seeded.insert(default.tab_type) {
                    continue;
                }
                self.tabs.push(WorkspaceTab::new(
                    WorkspaceTab::default_uid(workspace_uid, default.tab_type),
                    workspace_uid,
                    default.tab_type,
                    default.label(),
                ));
            }
        }

        let focused_here = self
            .active_tab()
            .is_some_and(|tab| tab.workspace_uid == workspace_uid);
        let first = self
            .workspace_tabs(workspace_uid)
            .next()
            .map(|tab| tab.uid.clone());
        if !focused_here && let Some(uid) = first {
            self.active_tab_uid = Some(uid);
        }
    }

    fn set_active_tab(&mut self, workspace_uid: &str, tab_type: WorkspaceTabType) {
        let uid = match self.find_typed(workspace_uid, tab_type) {
            Some(tab) => tab.uid.clone(),
            None => {
                let tab = WorkspaceTab::new(
                    WorkspaceTab::default_uid(workspace_uid, tab_type),
                    workspace_uid,
                    tab_type,
                    tab_type.default_label(),
                );
                let uid = tab.uid.clone();
                self.tabs.push(tab);
                uid
            }
        };
        self.active_tab_uid = Some(uid);
    }

    fn add_request_tab(
        &mut self,
        workspace_uid: String,
        item_uid: String,
        collection_uid: Option<CollectionUid>,
        tab_type: WorkspaceTabType,
        label: String,
    ) {
        let existing = self
            .tabs
            .iter()
            .find(|tab| tab.item_uid.as_deref() == Some(item_uid.as_str()));
        if let Some(existing) = existing {
            self.active_tab_uid = Some(existing.uid.clone());
            return;
        }

        let mut tab = WorkspaceTab::new(generate_id(), workspace_uid, tab_type, label);
        tab.item_uid = Some(item_uid);
        tab.collection_uid = collection_uid;

        self.active_tab_uid = Some(tab.uid.clone());
        self.tabs.push(tab);
    }

    /// Repairs a store loaded from disk: drops duplicate uids and points a
    /// dangling focus at the last tab.
    pub(crate) fn sanitize(&mut self) {
        let mut seen = HashSet::new();
        self.tabs.retain(|tab| seen.insert(tab.uid.clone()));
        self.close(|_| false);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn add(uid: &str, workspace_uid: &str, tab_type: WorkspaceTabType) -> WorkspaceTabCommand {
        WorkspaceTabCommand::AddWorkspaceTab {
            uid: uid.to_string(),
            workspace_uid: workspace_uid.to_string(),
            tab_type,
            label: tab_type.default_label().to_string(),
            permanent: false,
        }
    }

    fn request(item_uid: &str) -> WorkspaceTabCommand {
        WorkspaceTabCommand::AddRequestTab {
            workspace_uid: "w1".to_string(),
            item_uid: item_uid.to_string(),
            collection_uid: Some(CollectionUid::workspace_home("w1")),
            tab_type: WorkspaceTabType::HttpRequest,
            label: "Untitled".to_string(),
        }
    }

    fn initialize(workspace_uid: &str) -> WorkspaceTabCommand {
        WorkspaceTabCommand::InitializeWorkspaceTabs {
            workspace_uid: workspace_uid.to_string(),
            default_tabs: vec![
                DefaultWorkspaceTab::of(WorkspaceTabType::Overview),
                DefaultWorkspaceTab::of(WorkspaceTabType::Environments),
            ],
        }
    }

    fn uids(store: &WorkspaceTabStore) -> Vec<&str> {
        store.tabs().iter().map(|tab| tab.uid.as_str()).collect()
    }

    #[test]
    fn add_dedups_by_uid_and_type() {
        let mut store = WorkspaceTabStore::new();
        store.apply(add("o", "w1", WorkspaceTabType::Overview));
        store.apply(add("g", "w1", WorkspaceTabType::Git));
        store.apply(add("o2", "w1", WorkspaceTabType::Overview));

        assert_eq!(uids(&store), vec!["o", "g"]);
        assert_eq!(store.active_tab_uid(), Some("o"));

        store.apply(add("o3", "w2", WorkspaceTabType::Overview));
        assert_eq!(store.tabs().len(), 3);
        assert_eq!(store.active_tab_uid(), Some("o3"));
    }

    #[test]
    fn focus_ignores_unknown_uid() {
        let mut store = WorkspaceTabStore::new();
        store.apply(add("o", "w1", WorkspaceTabType::Overview));
        store.apply(add("g", "w1", WorkspaceTabType::Git));
        store.apply(WorkspaceTabCommand::FocusWorkspaceTab {
            uid: "o".to_string(),
        });
        store.apply(WorkspaceTabCommand::FocusWorkspaceTab {
            uid: "ghost".to_string(),
        });

        assert_eq!(store.active_tab_uid(), Some("o"));
    }

    #[test]
    fn request_tabs_are_keyed_by_item() {
        let mut store = WorkspaceTabStore::new();
        store.apply(request("i1"));
        let first = store.active_tab_uid().unwrap().to_string();
        store.apply(request("i2"));
        store.apply(request("i1"));

        assert_eq!(store.tabs().len(), 2);
        assert_eq!(store.active_tab_uid(), Some(first.as_str()));
        assert_ne!(store.tabs()[0].uid, store.tabs()[1].uid);
        assert_eq!(store.tabs()[0].item_uid.as_deref(), Some("i1"));
    }

    #[test]
    fn update_request_tab_label() {
        let mut store = WorkspaceTabStore::new();
        store.apply(request("i1"));
        store.apply(WorkspaceTabCommand::UpdateRequestTabLabel {
            item_uid: "i1".to_string(),
            label: "Get users".to_string(),
        });
        store.apply(WorkspaceTabCommand::UpdateRequestTabLabel {
            item_uid: "ghost".to_string(),
            label: "Nope".to_string(),
        });

        assert_eq!(store.tabs()[0].label, "Get users");
    }

    #[test]
    fn closing_active_tab_promotes_last() {
        let mut store = WorkspaceTabStore::new();
        store.apply(add("o", "w1", WorkspaceTabType::Overview));
        store.apply(add("e", "w1", WorkspaceTabType::Environments));
        store.apply(add("g", "w1", WorkspaceTabType::Git));
        store.apply(WorkspaceTabCommand::FocusWorkspaceTab {
            uid: "o".to_string(),
        });

        store.apply(WorkspaceTabCommand::CloseWorkspaceTab {
            uid: "e".to_string(),
        });
        assert_eq!(store.active_tab_uid(), Some("o"));

        store.apply(WorkspaceTabCommand::CloseWorkspaceTab {
            uid: "o".to_string(),
        });
        assert_eq!(store.active_tab_uid(), Some("g"));

        store.apply(WorkspaceTabCommand::CloseWorkspaceTabs {
            tab_uids: vec!["g".to_string()],
        });
        assert!(store.tabs().is_empty());
        assert_eq!(store.active_tab_uid(), None);
    }

    #[test]
    fn close_all_for_one_workspace() {
        let mut store = WorkspaceTabStore::new();
        store.apply(add("a", "w1", WorkspaceTabType::Overview));
        store.apply(add("b", "w2", WorkspaceTabType::Overview));
        store.apply(add("c", "w1", WorkspaceTabType::Git));

        store.apply(WorkspaceTabCommand::CloseAllWorkspaceTabs {
            workspace_uid: Some("w1".to_string()),
        });
        assert_eq!(uids(&store), vec!["b"]);
        assert_eq!(store.active_tab_uid(), Some("b"));

        store.apply(WorkspaceTabCommand::CloseAllWorkspaceTabs {
            workspace_uid: None,
        });
        assert!(store.tabs().is_empty());
        assert_eq!(store.active_tab_uid(), None);
    }

    #[test]
    fn reorder_moves_source_to_target_slot() {
        let mut store = WorkspaceTabStore::new();
        store.apply(add("a", "w1", WorkspaceTabType::Overview));
        store.apply(add("b", "w1", WorkspaceTabType::Environments));
        store.apply(add("c", "w1", WorkspaceTabType::Git));

        store.apply(WorkspaceTabCommand::ReorderWorkspaceTabs {
            source_uid: "c".to_string(),
            target_uid: "a".to_string(),
        });
        assert_eq!(uids(&store), vec!["c", "a", "b"]);

        let before = store.clone();
        store.apply(WorkspaceTabCommand::ReorderWorkspaceTabs {
            source_uid: "a".to_string(),
            target_uid: "a".to_string(),
        });
        assert_eq!(store, before);
    }

    #[test]
    fn initialize_seeds_once_and_focuses_first() {
        let mut store = WorkspaceTabStore::new();
        store.apply(initialize("w1"));

        assert_eq!(uids(&store), vec!["w1-overview", "w1-environments"]);
        assert_eq!(store.active_tab_uid(), Some("w1-overview"));
        assert_eq!(store.tabs()[1].label, "Environments");

        store.apply(WorkspaceTabCommand::FocusWorkspaceTab {
            uid: "w1-environments".to_string(),
        });
        store.apply(initialize("w1"));
        assert_eq!(store.tabs().len(), 2);
        assert_eq!(store.active_tab_uid(), Some("w1-environments"));
    }

    #[test]
    fn initialize_other_workspace_moves_focus() {
        let mut store = WorkspaceTabStore::new();
        store.apply(initialize("w1"));
        store.apply(initialize("w2"));

        assert_eq!(store.tabs().len(), 4);
        assert_eq!(store.active_tab_uid(), Some("w2-overview"));
    }

    #[test]
    fn initialize_existing_workspace_refocuses_its_first_tab() {
        let mut store = WorkspaceTabStore::new();
        store.apply(add("g", "w1", WorkspaceTabType::Git));
        store.apply(add("o", "w1", WorkspaceTabType::Overview));
        store.apply(initialize("w2"));
        assert_eq!(store.active_tab_uid(), Some("w2-overview"));

        store.apply(initialize("w1"));
        assert_eq!(uids(&store), vec!["g", "o", "w2-overview", "w2-environments"]);
        assert_eq!(store.active_tab_uid(), Some("g"));
    }

    #[test]
    fn initialize_skips_duplicate_defaults() {
        let mut store = WorkspaceTabStore::new();
        store.apply(WorkspaceTabCommand::InitializeWorkspaceTabs {
            workspace_uid: "w1".to_string(),
            default_tabs: vec![
                DefaultWorkspaceTab::of(WorkspaceTabType::Git),
                DefaultWorkspaceTab::of(WorkspaceTabType::Git),
            ],
        });
        assert_eq!(uids(&store), vec!["w1-git"]);
    }

    #[test]
    fn set_active_finds_or_creates() {
        let mut store = WorkspaceTabStore::new();
        store.apply(add("custom", "w1", WorkspaceTabType::Git));
        store.apply(WorkspaceTabCommand::SetActiveWorkspaceTab {
            workspace_uid: "w1".to_string(),
            tab_type: WorkspaceTabType::Git,
        });
        assert_eq!(store.active_tab_uid(), Some("custom"));

        store.apply(WorkspaceTabCommand::SetActiveWorkspaceTab {
            workspace_uid: "w1".to_string(),
            tab_type: WorkspaceTabType::Overview,
        });
        assert_eq!(store.active_tab_uid(), Some("w1-overview"));
        assert_eq!(store.active_tab().unwrap().label, "Overview");
        assert_eq!(store.tabs().len(), 2);
    }

    #[test]
    fn sanitize_repairs_dangling_focus() {
        let mut store = WorkspaceTabStore::new();
        store.apply(add("a", "w1", WorkspaceTabType::Overview));
        store.apply(add("b", "w1", WorkspaceTabType::Git));
        store.active_tab_uid = Some("gone".to_string());
        store.tabs.push(store.tabs[0].clone());

        store.sanitize();
        assert_eq!(uids(&store), vec!["a", "b"]);
        assert_eq!(store.active_tab_uid(), Some("b"));
    }
}
