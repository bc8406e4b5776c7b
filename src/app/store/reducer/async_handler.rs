use super::super::super::state::{AppState, CatalogStatus};
use super::super::action::AsyncAction;
use super::super::command::Command;

pub fn reduce(state: &mut AppState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::VersionsLoaded(result) => {
            match result {
                Ok(versions) => {
                    let count = versions.len();
                    let added = state.store.seed(versions);
                    log::info!("version catalog loaded: {count} versions ({added} new)");
                    state.catalog = CatalogStatus::Loaded { versions: count };
                }
                Err(err) => {
                    log::warn!("version catalog unavailable: {err:#}");
                    state.catalog = CatalogStatus::Failed(err.to_string());
                }
            }
            Vec::new()
        }
        AsyncAction::ArtifactGenerated { version, result } => {
            state.store.complete(&version, result);
            Vec::new()
        }
    }
}
