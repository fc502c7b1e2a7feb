//! Editor tabs: commands, the reducer and its selectors.

mod close;
mod command;
mod context;
mod selectors;
mod store;

pub use command::{Reorder, TabCommand, ViewChange};
pub use selectors::OpenedCollection;
pub use store::TabStore;
