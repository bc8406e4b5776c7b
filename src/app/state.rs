use crate::application::{HighlightCoordinator, VersionArtifactStore};
use crate::domain::{ArtifactState, HighlightSelection, Version};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    #[default]
    Idle,
    Loading,
    Loaded {
        versions: usize,
    },
    /// The catalog stays empty; the view keeps showing its loading state.
    Failed(String),
}

#[derive(Debug)]
pub struct AppState {
    pub catalog: CatalogStatus,
    pub store: VersionArtifactStore,

    /// Baseline version shown in the original pane.
    pub original: Version,
    /// Reference version shown in the modified pane.
    pub modified: Version,

    pub selection: HighlightSelection,
    pub highlighter: HighlightCoordinator,
    pub highlight_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Version::from("1.8"), Version::from("1.21.1"))
    }
}

impl AppState {
    pub fn new(original: Version, modified: Version) -> Self {
        Self {
            catalog: CatalogStatus::Idle,
            store: VersionArtifactStore::new(),
            original,
            modified,
            selection: HighlightSelection::None,
            highlighter: HighlightCoordinator::new(),
            highlight_error: None,
        }
    }

    pub fn symbols(&self) -> Vec<String> {
        self.store
            .snapshot(&self.modified)
            .symbol_keys()
            .map(str::to_string)
            .collect()
    }

    /// True once nothing is left in flight for the compared versions.
    pub fn is_settled(&self) -> bool {
        match self.catalog {
            CatalogStatus::Idle | CatalogStatus::Loading => false,
            CatalogStatus::Failed(_) => true,
            CatalogStatus::Loaded { .. } => [&self.original, &self.modified]
                .into_iter()
                .all(|version| {
                    matches!(
                        self.store.state(version),
                        ArtifactState::Ready(_) | ArtifactState::Failed(_)
                    )
                }),
        }
    }
}
