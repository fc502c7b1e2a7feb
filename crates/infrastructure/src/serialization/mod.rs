//! Deterministic JSON serialization for Tabnav files.
//!
//! Session and settings files are written with:
//! - Object keys in a stable order (`BTreeMap` in the stores)
//! - 2-space indentation
//! - A trailing newline

mod json;

pub use json::*;
