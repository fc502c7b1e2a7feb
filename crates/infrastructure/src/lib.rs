//! Tabnav Infrastructure - Adapters and implementations
//!
//! This crate provides file-backed implementations of the ports defined in
//! the application layer, plus the deterministic JSON helpers they share.

pub mod persistence;
pub mod serialization;

pub use persistence::{
    CONFIG_DIR_ENV, FileSessionRepository, SettingsError, SettingsRepository, config_dir,
};
pub use serialization::{
    SerializationError, from_json, from_json_bytes, to_json_stable, to_json_stable_bytes,
};
