//! Comparison application shell.
//!
//! Holds the comparison state, the reducer-style store, async message plumbing and
//! the binding to the display. Hosts call [`CompareApp::update`] once per frame.

mod binding;
mod init;
mod polling;
mod root;
mod state;
mod store;
mod update;

pub use binding::DisplayBinding;
pub use root::CompareApp;
pub use state::{AppState, CatalogStatus};
pub use store::{Action, AsyncAction, CatalogAction, Command, CompareAction, reduce};
