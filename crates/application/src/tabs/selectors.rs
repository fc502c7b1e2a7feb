//! Read-only views a tab bar renders from.

use serde::Serialize;
use tabnav_domain::{CollectionUid, Tab};

use super::store::TabStore;

/// A collection with open tabs, as listed in the collection switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenedCollection {
    /// The collection.
    pub collection_uid: CollectionUid,
    /// Number of visible tabs in the collection.
    pub tab_count: usize,
    /// First visible tab of the collection, if any.
    pub first_tab_uid: Option<String>,
}

impl OpenedCollection {
    const fn empty(collection_uid: CollectionUid) -> Self {
        Self {
            collection_uid,
            tab_count: 0,
            first_tab_uid: None,
        }
    }
}

impl TabStore {
    /// Returns the focused tab.
    #[must_use]
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_uid().and_then(|uid| self.tab(uid))
    }

    /// Returns the focused tab if it is visible in `workspace_uid`.
    #[must_use]
    pub fn active_tab_in(&self, workspace_uid: &str) -> Option<&Tab> {
        self.active_tab()
            .filter(|tab| tab.visible_in(Some(workspace_uid)))
    }

    /// Returns the tabs shown while `workspace_uid` is open, in display order.
    ///
    /// Tabs opened before workspaces existed carry no workspace and are
    /// shown everywhere. Without a workspace only those tabs are shown.
    pub fn visible_tabs<'a>(
        &'a self,
        workspace_uid: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Tab> + 'a {
        self.tabs()
            .iter()
            .filter(move |tab| tab.visible_in(workspace_uid))
    }

    /// Returns the tabs of one collection, in display order.
    pub fn collection_tabs<'a>(
        &'a self,
        collection_uid: &'a CollectionUid,
    ) -> impl Iterator<Item = &'a Tab> + 'a {
        self.tabs()
            .iter()
            .filter(move |tab| tab.in_collection(collection_uid))
    }

    /// Summarizes the collections with tabs visible in `workspace_uid`.
    ///
    /// When a workspace is given its home collection comes first and is
    /// always listed. The others follow in order of first appearance.
    #[must_use]
    pub fn opened_collections(&self, workspace_uid: Option<&str>) -> Vec<OpenedCollection> {
        let mut opened: Vec<OpenedCollection> = workspace_uid
            .map(|workspace_uid| {
                OpenedCollection::empty(CollectionUid::workspace_home(workspace_uid))
            })
            .into_iter()
            .collect();

        for tab in self.visible_tabs(workspace_uid) {
            let Some(collection_uid) = &tab.collection_uid else {
                continue;
            };

            match opened
                .iter_mut()
                .find(|entry| entry.collection_uid == *collection_uid)
            {
                Some(entry) => {
                    entry.tab_count += 1;
                    entry.first_tab_uid.get_or_insert_with(|| tab.uid.clone());
                }
                None => opened.push(OpenedCollection {
                    collection_uid: collection_uid.clone(),
                    tab_count: 1,
                    first_tab_uid: Some(tab.uid.clone()),
                }),
            }
        }

        opened
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tabnav_domain::{OpenTab, TabType};

    fn store() -> TabStore {
        let mut store = TabStore::new();
        let c = CollectionUid::collection;
        let opens = [
            OpenTab::new("legacy", c("c0"), TabType::HttpRequest),
            OpenTab::new("a1", c("c1"), TabType::HttpRequest).in_workspace("w1"),
            OpenTab::new("b1", c("c2"), TabType::Folder).in_workspace("w1"),
            OpenTab::new("a2", c("c1"), TabType::WsRequest).in_workspace("w1"),
            OpenTab::new("x1", c("c1"), TabType::HttpRequest).in_workspace("w2"),
        ];
        for open in opens {
            store.apply(open.with_preview(false).into());
        }
        store
    }

    fn uids<'a>(tabs: impl Iterator<Item = &'a Tab>) -> Vec<&'a str> {
        tabs.map(|tab| tab.uid.as_str()).collect()
    }

    #[test]
    fn visible_tabs_include_legacy_tabs() {
        let store = store();
        assert_eq!(uids(store.visible_tabs(Some("w1"))), vec!["legacy", "a1", "b1", "a2"]);
        assert_eq!(uids(store.visible_tabs(Some("w2"))), vec!["legacy", "x1"]);
        assert_eq!(uids(store.visible_tabs(None)), vec!["legacy"]);
    }

    #[test]
    fn collection_tabs_span_workspaces() {
        let store = store();
        let c1 = CollectionUid::collection("c1");
        assert_eq!(uids(store.collection_tabs(&c1)), vec!["a1", "a2", "x1"]);
    }

    #[test]
    fn active_tab_in_hides_foreign_tab() {
        let store = store();
        assert_eq!(store.active_tab().map(|tab| tab.uid.as_str()), Some("x1"));
        assert!(store.active_tab_in("w1").is_none());
        assert!(store.active_tab_in("w2").is_some());
    }

    #[test]
    fn opened_collections_lists_home_first() {
        let store = store();
        assert_eq!(
            store.opened_collections(Some("w1")),
            vec![
                OpenedCollection::empty(CollectionUid::workspace_home("w1")),
                OpenedCollection {
                    collection_uid: CollectionUid::collection("c0"),
                    tab_count: 1,
                    first_tab_uid: Some("legacy".to_string()),
                },
                OpenedCollection {
                    collection_uid: CollectionUid::collection("c1"),
                    tab_count: 2,
                    first_tab_uid: Some("a1".to_string()),
                },
                OpenedCollection {
                    collection_uid: CollectionUid::collection("c2"),
                    tab_count: 1,
                    first_tab_uid: Some("b1".to_string()),
                },
            ]
        );
    }

    #[test]
    fn opened_collections_counts_home_tabs() {
        let mut store = TabStore::new();
        store.apply(
            OpenTab::new("home", CollectionUid::workspace_home("w1"), TabType::WorkspaceOverview)
                .in_workspace("w1")
                .into(),
        );

        let opened = store.opened_collections(Some("w1"));
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].tab_count, 1);
        assert_eq!(opened[0].first_tab_uid.as_deref(), Some("home"));
    }
}
