use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Zero-based, half-open span inside a generated source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl Range {
    pub fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }
}

impl From<[u32; 4]> for Range {
    fn from([start_line, start_column, end_line, end_column]: [u32; 4]) -> Self {
        Self::new(start_line, start_column, end_line, end_column)
    }
}

/// One symbol of the location index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub symbol_key: String,
    pub range: Range,
}

impl LocationEntry {
    pub fn new(symbol_key: impl Into<String>, range: Range) -> Self {
        Self {
            symbol_key: symbol_key.into(),
            range,
        }
    }
}

/// Generated source text plus its symbol location index for one version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArtifact {
    pub text: String,
    /// Insertion order from the converter; kept for display.
    pub locations: Vec<LocationEntry>,
}

impl SourceArtifact {
    pub fn new(text: impl Into<String>, locations: Vec<LocationEntry>) -> Self {
        Self {
            text: text.into(),
            locations,
        }
    }

    /// The placeholder returned while a version is not generated yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.locations.is_empty()
    }

    /// Looks up a symbol by exact key. With duplicate keys the first entry in stored
    /// order wins.
    pub fn find(&self, symbol_key: &str) -> Option<&LocationEntry> {
        self.locations
            .iter()
            .find(|entry| entry.symbol_key == symbol_key)
    }

    pub fn symbol_keys(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(|entry| entry.symbol_key.as_str())
    }
}

/// Cache state of a single version.
#[derive(Debug, Clone, Default)]
pub enum ArtifactState {
    #[default]
    Absent,
    Pending,
    Ready(Arc<SourceArtifact>),
    /// Generation failed; the next request retries.
    Failed(String),
}

impl ArtifactState {
    pub fn is_ready(&self) -> bool {
        matches!(self, ArtifactState::Ready(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ArtifactState::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArtifactState::Absent => "absent",
            ArtifactState::Pending => "pending",
            ArtifactState::Ready(_) => "ready",
            ArtifactState::Failed(_) => "failed",
        }
    }
}
