use super::super::super::state::AppState;
use super::super::action::CompareAction;
use super::super::command::Command;
use crate::domain::Version;

pub fn reduce(state: &mut AppState, action: CompareAction) -> Vec<Command> {
    match action {
        CompareAction::SelectOriginal(version) => {
            state.original = version.clone();
            request(state, version)
        }
        CompareAction::SelectModified(version) => {
            state.modified = version.clone();
            request(state, version)
        }
        CompareAction::SelectHighlight(selection) => {
            state.selection = selection;
            state.highlight_error = None;
            Vec::new()
        }
        CompareAction::RequestVersion(version) => request(state, version),
    }
}

fn request(state: &mut AppState, version: Version) -> Vec<Command> {
    if state.store.request_version(&version).schedule {
        vec![Command::GenerateArtifact { version }]
    } else {
        Vec::new()
    }
}
