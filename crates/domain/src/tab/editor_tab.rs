//! Editor tabs and the payload used to open them.

use serde::{Deserialize, Serialize};

use super::collection::CollectionUid;
use super::kind::{PANE_PARAMS, PANE_RESPONSE, TabType};

fn default_request_pane_tab() -> String {
    PANE_PARAMS.to_string()
}

fn default_response_pane_tab() -> String {
    PANE_RESPONSE.to_string()
}

/// An open editor tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier, stable for the tab's lifetime.
    pub uid: String,

    /// Owning collection. Absent on legacy tabs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_uid: Option<CollectionUid>,

    /// Owning workspace. Absent tabs are shown in every workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_uid: Option<String>,

    /// What the tab shows.
    #[serde(rename = "type", default)]
    pub tab_type: TabType,

    /// Preview tabs are replaced in place by the next tab opened in their workspace.
    #[serde(default)]
    pub preview: bool,

    /// Selected request pane.
    #[serde(default = "default_request_pane_tab")]
    pub request_pane_tab: String,

    /// Selected response pane.
    #[serde(default = "default_response_pane_tab")]
    pub response_pane_tab: String,

    /// Response body format override.
    #[serde(default)]
    pub response_format: Option<String>,

    /// Response view mode override.
    #[serde(default)]
    pub response_view_tab: Option<String>,

    /// Request pane width in logical pixels.
    #[serde(default)]
    pub request_pane_width: Option<f64>,

    /// Request pane height in logical pixels.
    #[serde(default)]
    pub request_pane_height: Option<f64>,

    /// Vertical scroll offset of the response pane.
    #[serde(default)]
    pub response_pane_scroll_position: Option<f64>,

    /// Folder shown by a folder tab.
    ///
    /// Only folder tabs carry one; tabs of every other type leave it unset
    /// even though they have a uid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_uid: Option<String>,

    /// Response example opened in the tab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_uid: Option<String>,

    /// Collection item opened in the tab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_uid: Option<String>,

    /// Whether the "save transient request" dialog is requested.
    #[serde(default)]
    pub show_save_transient_modal: bool,
}

impl Tab {
    /// Returns true if the tab is scoped to exactly this workspace.
    #[must_use]
    pub fn in_workspace(&self, workspace_uid: &str) -> bool {
        self.workspace_uid.as_deref() == Some(workspace_uid)
    }

    /// Returns true if the tab should be shown while `workspace_uid` is open.
    ///
    /// Tabs without a workspace predate workspaces and are shown everywhere.
    #[must_use]
    pub fn visible_in(&self, workspace_uid: Option<&str>) -> bool {
        match (&self.workspace_uid, workspace_uid) {
            (None, _) => true,
            (Some(own), Some(requested)) => own == requested,
            (Some(_), None) => false,
        }
    }

    /// Returns true if the tab belongs to the given collection.
    #[must_use]
    pub fn in_collection(&self, collection_uid: &CollectionUid) -> bool {
        self.collection_uid.as_ref() == Some(collection_uid)
    }
}

/// Everything needed to open (or re-focus) an editor tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenTab {
    /// Uid of the tab to open.
    pub uid: String,

    /// Owning collection.
    pub collection_uid: CollectionUid,

    /// Owning workspace.
    #[serde(default)]
    pub workspace_uid: Option<String>,

    /// What the tab shows.
    #[serde(rename = "type", default)]
    pub tab_type: TabType,

    /// Request pane to open on; defaults by type.
    #[serde(default)]
    pub request_pane_tab: Option<String>,

    /// Preview flag; defaults to true unless the type is a singleton.
    #[serde(default)]
    pub preview: Option<bool>,

    /// Response example to show.
    #[serde(default)]
    pub example_uid: Option<String>,

    /// Collection item to show.
    #[serde(default)]
    pub item_uid: Option<String>,

    /// Insert at the front of the tab bar instead of appending.
    #[serde(default)]
    pub insert_first: bool,
}

impl OpenTab {
    /// Creates a payload with every optional field unset.
    #[must_use]
    pub fn new(uid: impl Into<String>, collection_uid: CollectionUid, tab_type: TabType) -> Self {
        Self {
            uid: uid.into(),
            collection_uid,
            workspace_uid: None,
            tab_type,
            request_pane_tab: None,
            preview: None,
            example_uid: None,
            item_uid: None,
            insert_first: false,
        }
    }

    /// Scopes the tab to a workspace.
    #[must_use]
    pub fn in_workspace(mut self, workspace_uid: impl Into<String>) -> Self {
        self.workspace_uid = Some(workspace_uid.into());
        self
    }

    /// Overrides the preview flag.
    #[must_use]
    pub const fn with_preview(mut self, preview: bool) -> Self {
        self.preview = Some(preview);
        self
    }

    /// Overrides the initial request pane.
    #[must_use]
    pub fn with_request_pane_tab(mut self, pane: impl Into<String>) -> Self {
        self.request_pane_tab = Some(pane.into());
        self
    }

    /// Associates a response example.
    #[must_use]
    pub fn with_example(mut self, example_uid: impl Into<String>) -> Self {
        self.example_uid = Some(example_uid.into());
        self
    }

    /// Associates a collection item.
    #[must_use]
    pub fn with_item(mut self, item_uid: impl Into<String>) -> Self {
        self.item_uid = Some(item_uid.into());
        self
    }

    /// Places the tab at the front of the tab bar.
    #[must_use]
    pub const fn first(mut self) -> Self {
        self.insert_first = true;
        self
    }

    /// Builds the tab this payload describes, filling type-based defaults.
    #[must_use]
    pub fn build_tab(&self) -> Tab {
        Tab {
            uid: self.uid.clone(),
            collection_uid: Some(self.collection_uid.clone()),
            workspace_uid: self.workspace_uid.clone(),
            tab_type: self.tab_type,
            preview: self.preview.unwrap_or(!self.tab_type.is_singleton()),
            request_pane_tab: self
                .request_pane_tab
                .clone()
                .unwrap_or_else(|| self.tab_type.default_request_pane_tab().to_string()),
            response_pane_tab: default_response_pane_tab(),
            response_format: None,
            response_view_tab: None,
            request_pane_width: None,
            request_pane_height: None,
            response_pane_scroll_position: None,
            folder_uid: (self.tab_type == TabType::Folder).then(|| self.uid.clone()),
            example_uid: self.example_uid.clone(),
            item_uid: self.item_uid.clone(),
            show_save_transient_modal: false,
        }
    }
}
