pub mod recording;
pub mod terminal;
pub mod traits;

pub use recording::{DisplayCall, RecordingDisplay};
pub use terminal::TerminalDisplay;
pub use traits::DisplayAdapter;
