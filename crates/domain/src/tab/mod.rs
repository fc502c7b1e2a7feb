//! Editor tab types.

mod collection;
mod editor_tab;
mod kind;

pub use collection::{CollectionUid, WORKSPACE_HOME_PREFIX};
pub use editor_tab::{OpenTab, Tab};
pub use kind::{PANE_BODY, PANE_PARAMS, PANE_QUERY, PANE_RESPONSE, TabType};
