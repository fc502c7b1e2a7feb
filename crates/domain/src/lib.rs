//! Tabnav Domain - Core tab types
//!
//! This crate defines the data model of the tab navigation core: editor
//! tabs, workspace tabs, collection identifiers and the access history.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod history;
pub mod id;
pub mod navigation;
pub mod settings;
pub mod tab;
pub mod workspace_tab;

pub use error::{DomainError, DomainResult};
pub use history::{CollectionAccessHistory, DEFAULT_HISTORY_LIMIT};
pub use id::generate_id;
pub use navigation::{MoveDirection, SwitchDirection};
pub use settings::TabSettings;
pub use tab::{CollectionUid, OpenTab, Tab, TabType, WORKSPACE_HOME_PREFIX};
pub use workspace_tab::{WorkspaceTab, WorkspaceTabType};
