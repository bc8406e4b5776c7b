pub mod async_handler;
pub mod catalog;
pub mod compare;

use super::super::state::AppState;
use super::action::Action;
use super::command::Command;

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Catalog(action) => catalog::reduce(state, action),
        Action::Compare(action) => compare::reduce(state, action),
        Action::Async(action) => async_handler::reduce(state, action),
    }
}
