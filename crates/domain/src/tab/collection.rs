//! Collection identifiers.
//!
//! A collection id is either a real, persisted collection or the synthetic
//! "workspace home" collection every workspace owns. The two are distinct
//! variants so navigation code never has to inspect the string form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Wire prefix that marks a workspace home collection id.
pub const WORKSPACE_HOME_PREFIX: &str = "virtual-";

/// Identifies the collection a tab belongs to.
///
/// Serialized as a plain string: `virtual-<workspace>` for the workspace
/// home, the raw id otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CollectionUid {
    /// A real collection stored on disk.
    Collection(String),
    /// The synthetic home collection of the given workspace.
    WorkspaceHome(String),
}

impl CollectionUid {
    /// Creates an id for a real collection.
    #[must_use]
    pub fn collection(id: impl Into<String>) -> Self {
        Self::Collection(id.into())
    }

    /// Creates the id of a workspace's home collection.
    #[must_use]
    pub fn workspace_home(workspace_uid: impl Into<String>) -> Self {
        Self::WorkspaceHome(workspace_uid.into())
    }

    /// Returns true for the synthetic workspace home collection.
    #[must_use]
    pub const fn is_workspace_home(&self) -> bool {
        matches!(self, Self::WorkspaceHome(_))
    }
}

impl fmt::Display for CollectionUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collection(id) => f.write_str(id),
            Self::WorkspaceHome(workspace_uid) => {
                write!(f, "{WORKSPACE_HOME_PREFIX}{workspace_uid}")
            }
        }
    }
}

impl FromStr for CollectionUid {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        if s.is_empty() {
            return Err(DomainError::InvalidIdentifier(
                "collection id cannot be empty".to_string(),
            ));
        }

        match s.strip_prefix(WORKSPACE_HOME_PREFIX) {
            Some("") => Err(DomainError::InvalidIdentifier(format!(
                "workspace home id without workspace: {s}"
            ))),
            Some(workspace_uid) => Ok(Self::WorkspaceHome(workspace_uid.to_string())),
            None => Ok(Self::Collection(s.to_string())),
        }
    }
}

impl TryFrom<String> for CollectionUid {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        value.parse()
    }
}

impl From<CollectionUid> for String {
    fn from(value: CollectionUid) -> Self {
        value.to_string()
    }
}
