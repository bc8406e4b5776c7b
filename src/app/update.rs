use super::CompareApp;
use super::store::{Action, CompareAction};
use crate::application::PaneSnapshot;
use crate::domain::{ArtifactState, Version};
use crate::infra::display::DisplayAdapter;

impl<D: DisplayAdapter> CompareApp<D> {
    /// Runs one frame: applies finished async work, requests both compared
    /// versions, pushes changed content and re-issues the highlight when its
    /// inputs changed. Returns whether anything visible changed.
    pub fn update(&mut self) -> bool {
        let mut changed = self.poll_action_messages();

        let original = self.state.original.clone();
        let modified = self.state.modified.clone();
        self.request_unless_failed(&original);
        self.request_unless_failed(&modified);

        let original_artifact = self.state.store.snapshot(&original);
        let modified_artifact = self.state.store.snapshot(&modified);
        if self
            .binding
            .sync_content(&original_artifact, &modified_artifact)
        {
            self.state.highlighter.invalidate();
            changed = true;
        }

        let refreshed = self.state.highlighter.refresh(
            &self.state.selection,
            PaneSnapshot {
                version: &original,
                artifact: &original_artifact,
                ready: self.state.store.is_ready(&original),
            },
            PaneSnapshot {
                version: &modified,
                artifact: &modified_artifact,
                ready: self.state.store.is_ready(&modified),
            },
        );
        match refreshed {
            Ok(Some(commands)) => {
                self.binding.apply(&commands);
                self.state.highlight_error = None;
                changed = true;
            }
            Ok(None) => {}
            Err(err) => {
                log::warn!("highlight skipped: {err}");
                self.binding.clear_all();
                self.state.highlight_error = Some(err.to_string());
                changed = true;
            }
        }

        changed
    }

    // Failed versions are retried only through an explicit selection, not on
    // every frame.
    fn request_unless_failed(&mut self, version: &Version) {
        if !matches!(self.state.store.state(version), ArtifactState::Failed(_)) {
            self.dispatch(Action::Compare(CompareAction::RequestVersion(
                version.clone(),
            )));
        }
    }
}
