//! Application use cases (session orchestration).

mod restore_session;
mod save_session;

pub use restore_session::RestoreSession;
pub use save_session::SaveSession;
