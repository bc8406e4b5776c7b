use super::traits::DisplayAdapter;
use crate::domain::{DisplayRange, Pane};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    SetContent { original: String, modified: String },
    SetDecoration { pane: Pane, range: DisplayRange },
    ClearDecorations(Pane),
    RevealPosition { pane: Pane, range: DisplayRange },
}

/// Display that only records the calls it receives. Used by hosts without a
/// real widget and by tests.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    calls: Vec<DisplayCall>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DisplayCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DisplayCall> {
        std::mem::take(&mut self.calls)
    }
}

impl DisplayAdapter for RecordingDisplay {
    fn set_content(&mut self, original: &str, modified: &str) {
        self.calls.push(DisplayCall::SetContent {
            original: original.to_string(),
            modified: modified.to_string(),
        });
    }

    fn set_decoration(&mut self, pane: Pane, range: DisplayRange) {
        self.calls.push(DisplayCall::SetDecoration { pane, range });
    }

    fn clear_decorations(&mut self, pane: Pane) {
        self.calls.push(DisplayCall::ClearDecorations(pane));
    }

    fn reveal_position(&mut self, pane: Pane, range: DisplayRange) {
        self.calls.push(DisplayCall::RevealPosition { pane, range });
    }
}
