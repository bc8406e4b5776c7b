use super::CompareApp;
use super::state::CatalogStatus;
use crate::infra::display::DisplayAdapter;

impl<D: DisplayAdapter> CompareApp<D> {
    /// Dispatches every async result that arrived since the last call.
    pub(super) fn poll_action_messages(&mut self) -> bool {
        let mut any = false;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            any = true;
        }
        any
    }

    /// Applies arrived async results without requesting any generation.
    /// Returns whether the catalog has resolved, loaded or failed.
    pub fn poll_catalog(&mut self) -> bool {
        self.poll_action_messages();
        matches!(
            self.state.catalog,
            CatalogStatus::Loaded { .. } | CatalogStatus::Failed(_)
        )
    }
}
