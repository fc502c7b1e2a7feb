//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the tab core and external systems.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod session_repository;

pub use session_repository::{SessionError, SessionRepository};
