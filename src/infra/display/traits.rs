use crate::domain::{DisplayRange, Pane};

/// Side-by-side rendering component.
///
/// Ranges use the display's own convention (one-based, inclusive start). Each pane
/// holds at most one decoration; setting a new one replaces the previous.
pub trait DisplayAdapter {
    fn set_content(&mut self, original: &str, modified: &str);
    fn set_decoration(&mut self, pane: Pane, range: DisplayRange);
    fn clear_decorations(&mut self, pane: Pane);
    fn reveal_position(&mut self, pane: Pane, range: DisplayRange);
}
