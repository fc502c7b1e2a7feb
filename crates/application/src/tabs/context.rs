//! Switching between workspaces and collections.

use tabnav_domain::CollectionUid;

use super::store::TabStore;

impl TabStore {
    pub(super) fn switch_workspace_context(&mut self, from: Option<&str>, to: &str) {
        if let Some(from) = from
            && let Some(active) = self.active_tab()
            && active.in_workspace(from)
        {
            let uid = active.uid.clone();
            self.remember_for_workspace(from, Some(&uid));
        }

        if let Some(remembered) = self.remembered_for_workspace(to)
            && self.contains(remembered)
        {
            let uid = remembered.to_string();
            self.set_active(Some(uid));
            return;
        }

        let first = self
            .tabs()
            .iter()
            .find(|tab| tab.in_workspace(to))
            .map(|tab| tab.uid.clone());
        if let Some(uid) = &first {
            self.remember_for_workspace(to, Some(uid));
        }
        self.set_active(first);
    }

    pub(super) fn switch_collection_context(
        &mut self,
        from: Option<&CollectionUid>,
        to: &CollectionUid,
    ) {
        if let Some(from) = from
            && let Some(active) = self.active_tab()
            && active.in_collection(from)
        {
            let uid = active.uid.clone();
            self.remember_for_collection(from, &uid);
        }

        self.record_access(to);

        if let Some(remembered) = self.remembered_for_collection(to)
            && self.contains(remembered)
        {
            let uid = remembered.to_string();
            self.set_active(Some(uid));
            return;
        }

        let first = self
            .tabs()
            .iter()
            .find(|tab| tab.in_collection(to))
            .map(|tab| tab.uid.clone());
        if let Some(uid) = &first {
            self.remember_for_collection(to, uid);
        }
        self.set_active(first);
    }
}
