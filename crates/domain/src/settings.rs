//! User settings for tab navigation.

use serde::{Deserialize, Serialize};

use crate::history::DEFAULT_HISTORY_LIMIT;

/// User preferences that shape the tab stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSettings {
    /// Maximum number of collections kept in the access history.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Whether the open tabs are saved when the application exits.
    #[serde(default = "default_persist_session")]
    pub persist_session: bool,
}

const fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

const fn default_persist_session() -> bool {
    true
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            persist_session: default_persist_session(),
        }
    }
}
