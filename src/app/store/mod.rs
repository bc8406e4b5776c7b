//! Reducer-style state updates + side-effect commands.

mod action;
mod command;
mod reducer;
mod runtime;

pub use action::{Action, AsyncAction, CatalogAction, CompareAction};
pub use command::Command;
pub use reducer::reduce;

use super::CompareApp;
use crate::infra::display::DisplayAdapter;

impl<D: DisplayAdapter> CompareApp<D> {
    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            runtime::run(self, command);
        }
    }
}
