use super::super::super::state::{AppState, CatalogStatus};
use super::super::action::CatalogAction;
use super::super::command::Command;

pub fn reduce(state: &mut AppState, action: CatalogAction) -> Vec<Command> {
    match action {
        CatalogAction::LoadRequested => {
            if state.catalog == CatalogStatus::Loading {
                return Vec::new();
            }
            state.catalog = CatalogStatus::Loading;
            vec![Command::LoadCatalog]
        }
    }
}
