use super::artifact::Range;
use std::fmt;

/// One side of the two-way comparison view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    /// Baseline version.
    Original,
    /// Reference version; always the side that is revealed.
    Modified,
}

impl fmt::Display for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pane::Original => f.write_str("original"),
            Pane::Modified => f.write_str("modified"),
        }
    }
}

/// Range in the display's convention: one-based, inclusive start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayRange {
    pub start_line_number: u32,
    pub start_column: u32,
    pub end_line_number: u32,
    pub end_column: u32,
}

impl From<Range> for DisplayRange {
    fn from(range: Range) -> Self {
        Self {
            start_line_number: range.start_line.saturating_add(1),
            start_column: range.start_column.saturating_add(1),
            end_line_number: range.end_line.saturating_add(1),
            end_column: range.end_column.saturating_add(1),
        }
    }
}

/// The symbol chosen for highlighting, applied to both panes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum HighlightSelection {
    #[default]
    None,
    Symbol(String),
}

impl HighlightSelection {
    pub const NONE_KEY: &'static str = "none";

    /// Maps a selector value to a selection; the `none` sentinel clears it.
    pub fn from_key(key: &str) -> Self {
        if key == Self::NONE_KEY {
            HighlightSelection::None
        } else {
            HighlightSelection::Symbol(key.to_string())
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            HighlightSelection::None => None,
            HighlightSelection::Symbol(key) => Some(key.as_str()),
        }
    }
}

/// Instruction for the display, already converted to its range convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayCommand {
    ClearDecorations(Pane),
    SetDecoration { pane: Pane, range: DisplayRange },
    RevealPosition { pane: Pane, range: DisplayRange },
}
