//! File-backed persistence.
//!
//! Files live in the platform-specific config directory:
//! - Linux/macOS: ~/.config/tabnav/
//! - Windows: %APPDATA%/tabnav/
//!
//! Setting `TABNAV_CONFIG_DIR` overrides the location.

mod session_repository;
mod settings_repository;

use std::path::PathBuf;

pub use session_repository::FileSessionRepository;
pub use settings_repository::{SettingsError, SettingsRepository};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "TABNAV_CONFIG_DIR";

/// Returns the directory holding the Tabnav files, if one can be determined.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    std::env::var_os(CONFIG_DIR_ENV)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("tabnav")))
}
