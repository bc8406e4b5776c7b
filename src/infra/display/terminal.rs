//! Plain-text side-by-side display for the command line.

use similar::{DiffTag, TextDiff};

use super::traits::DisplayAdapter;
use crate::domain::{DisplayRange, Pane};

const GUTTER: usize = 7;

#[derive(Debug, Default, Clone, Copy)]
struct PaneView {
    decoration: Option<DisplayRange>,
    reveal: Option<DisplayRange>,
}

impl PaneView {
    fn decorates(&self, line_number: u32) -> bool {
        self.decoration.is_some_and(|range| {
            line_number >= range.start_line_number && line_number <= range.end_line_number
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Row {
    tag: DiffTag,
    left: Option<usize>,
    right: Option<usize>,
}

#[derive(Debug, Default)]
pub struct TerminalDisplay {
    original: String,
    modified: String,
    original_view: PaneView,
    modified_view: PaneView,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn view_mut(&mut self, pane: Pane) -> &mut PaneView {
        match pane {
            Pane::Original => &mut self.original_view,
            Pane::Modified => &mut self.modified_view,
        }
    }

    /// Renders `context` aligned rows around the revealed position (modified pane
    /// first), or from the top when nothing was revealed. Each pane column is
    /// `width` characters wide.
    pub fn render(&self, context: usize, width: usize) -> String {
        let left_lines: Vec<&str> = self.original.lines().collect();
        let right_lines: Vec<&str> = self.modified.lines().collect();
        let rows = align_rows(&self.original, &self.modified);

        let focus = self
            .modified_view
            .reveal
            .and_then(|range| find_row(&rows, |row| row.right, range))
            .or_else(|| {
                self.original_view
                    .reveal
                    .and_then(|range| find_row(&rows, |row| row.left, range))
            });
        let (start, end) = match focus {
            Some(idx) => (
                idx.saturating_sub(context),
                (idx + context + 1).min(rows.len()),
            ),
            None => (0, (2 * context + 1).min(rows.len())),
        };

        let mut out = Vec::with_capacity(end - start + 1);
        out.push(format!(
            "{:<w$} | {}",
            "original",
            "modified",
            w = width + GUTTER
        ));
        for row in &rows[start..end] {
            let marker = match row.tag {
                DiffTag::Equal => '|',
                DiffTag::Delete => '<',
                DiffTag::Insert => '>',
                DiffTag::Replace => '~',
            };
            let left = cell(&left_lines, row.left, &self.original_view, width);
            let right = cell(&right_lines, row.right, &self.modified_view, width);
            out.push(format!("{left} {marker} {}", right.trim_end()));
        }
        out.join("\n")
    }
}

fn align_rows(original: &str, modified: &str) -> Vec<Row> {
    let diff = TextDiff::from_lines(original, modified);
    let mut rows = Vec::new();
    for op in diff.ops() {
        let (tag, old, new) = op.as_tag_tuple();
        let len = old.len().max(new.len());
        for offset in 0..len {
            let left = (offset < old.len()).then(|| old.start + offset);
            let right = (offset < new.len()).then(|| new.start + offset);
            rows.push(Row { tag, left, right });
        }
    }
    rows
}

fn find_row(rows: &[Row], side: impl Fn(&Row) -> Option<usize>, range: DisplayRange) -> Option<usize> {
    let target = range.start_line_number.checked_sub(1)? as usize;
    rows.iter().position(|row| side(row) == Some(target))
}

fn cell(lines: &[&str], idx: Option<usize>, view: &PaneView, width: usize) -> String {
    let Some(idx) = idx else {
        return " ".repeat(width + GUTTER);
    };
    let line_number = idx + 1;
    let mark = if view.decorates(line_number as u32) {
        '*'
    } else {
        ' '
    };
    let text: String = lines
        .get(idx)
        .copied()
        .unwrap_or_default()
        .chars()
        .take(width)
        .collect();
    format!("{mark}{line_number:>5} {text:<width$}")
}

impl DisplayAdapter for TerminalDisplay {
    fn set_content(&mut self, original: &str, modified: &str) {
        self.original = original.to_string();
        self.modified = modified.to_string();
    }

    fn set_decoration(&mut self, pane: Pane, range: DisplayRange) {
        self.view_mut(pane).decoration = Some(range);
    }

    fn clear_decorations(&mut self, pane: Pane) {
        self.view_mut(pane).decoration = None;
    }

    fn reveal_position(&mut self, pane: Pane, range: DisplayRange) {
        self.view_mut(pane).reveal = Some(range);
    }
}
