use std::sync::Arc;

use crate::domain::{DisplayCommand, Pane, SourceArtifact};
use crate::infra::display::DisplayAdapter;

/// Owns the display for the lifetime of a comparison view.
///
/// Mounting and dropping both clear the decorations of each pane.
pub struct DisplayBinding<D: DisplayAdapter> {
    display: D,
    content: Option<(Arc<SourceArtifact>, Arc<SourceArtifact>)>,
}

impl<D: DisplayAdapter> DisplayBinding<D> {
    pub fn mount(mut display: D) -> Self {
        display.clear_decorations(Pane::Original);
        display.clear_decorations(Pane::Modified);
        Self {
            display,
            content: None,
        }
    }

    /// Pushes both texts when either snapshot changed. Returns whether it did.
    pub fn sync_content(
        &mut self,
        original: &Arc<SourceArtifact>,
        modified: &Arc<SourceArtifact>,
    ) -> bool {
        let unchanged = self.content.as_ref().is_some_and(|(shown_original, shown_modified)| {
            Arc::ptr_eq(shown_original, original) && Arc::ptr_eq(shown_modified, modified)
        });
        if unchanged {
            return false;
        }
        self.display.set_content(&original.text, &modified.text);
        self.content = Some((Arc::clone(original), Arc::clone(modified)));
        true
    }

    pub fn apply(&mut self, commands: &[DisplayCommand]) {
        for command in commands {
            match *command {
                DisplayCommand::ClearDecorations(pane) => self.display.clear_decorations(pane),
                DisplayCommand::SetDecoration { pane, range } => {
                    self.display.set_decoration(pane, range)
                }
                DisplayCommand::RevealPosition { pane, range } => {
                    self.display.reveal_position(pane, range)
                }
            }
        }
    }

    pub fn clear_all(&mut self) {
        self.display.clear_decorations(Pane::Original);
        self.display.clear_decorations(Pane::Modified);
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

impl<D: DisplayAdapter> Drop for DisplayBinding<D> {
    fn drop(&mut self) {
        self.clear_all();
    }
}
