//! Per-version artifact cache with single-flight generation.
//!
//! Each version moves `Absent -> Pending -> {Ready | Failed}`. The store never
//! runs generation itself: `request_version` tells the caller whether to schedule
//! it, and `complete` records the outcome. Entries are never evicted.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{ArtifactError, ArtifactState, SourceArtifact, Version};

static ABSENT: ArtifactState = ArtifactState::Absent;

/// Result of [`VersionArtifactStore::request_version`].
#[derive(Debug, Clone)]
pub struct ArtifactRequest {
    /// Cached artifact when ready, the shared empty placeholder otherwise.
    pub artifact: Arc<SourceArtifact>,
    /// True when this call moved the version to `Pending` and the caller must
    /// start generation.
    pub schedule: bool,
}

#[derive(Debug)]
pub struct VersionArtifactStore {
    seeded: bool,
    order: Vec<Version>,
    entries: HashMap<Version, ArtifactState>,
    placeholder: Arc<SourceArtifact>,
}

impl Default for VersionArtifactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionArtifactStore {
    pub fn new() -> Self {
        Self {
            seeded: false,
            order: Vec::new(),
            entries: HashMap::new(),
            placeholder: Arc::new(SourceArtifact::empty()),
        }
    }

    /// Registers catalog versions as `Absent`. Existing entries keep their state.
    /// Returns how many versions were new.
    pub fn seed(&mut self, versions: impl IntoIterator<Item = Version>) -> usize {
        self.seeded = true;
        let mut added = 0;
        for version in versions {
            if !self.entries.contains_key(&version) {
                self.entries.insert(version.clone(), ArtifactState::Absent);
                self.order.push(version);
                added += 1;
            }
        }
        added
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Returns the current snapshot of `version` and, when the version is absent
    /// or failed, marks it `Pending` and asks the caller to schedule generation.
    ///
    /// Before the catalog is seeded nothing is scheduled. Versions outside the
    /// catalog are added on first request.
    pub fn request_version(&mut self, version: &Version) -> ArtifactRequest {
        if !self.seeded {
            return self.placeholder_request(false);
        }

        if !self.entries.contains_key(version) {
            self.order.push(version.clone());
        }
        let state = self.entries.entry(version.clone()).or_default();

        match state {
            ArtifactState::Ready(artifact) => ArtifactRequest {
                artifact: Arc::clone(artifact),
                schedule: false,
            },
            ArtifactState::Pending => self.placeholder_request(false),
            ArtifactState::Absent | ArtifactState::Failed(_) => {
                log::debug!("{version}: {} -> pending", state.label());
                *state = ArtifactState::Pending;
                self.placeholder_request(true)
            }
        }
    }

    /// Records the outcome of a generation started by `request_version`.
    ///
    /// Only a `Pending` entry is updated; anything else is logged and ignored so a
    /// ready artifact is never overwritten. Returns whether the state changed.
    pub fn complete(
        &mut self,
        version: &Version,
        result: Result<SourceArtifact, ArtifactError>,
    ) -> bool {
        let Some(state) = self.entries.get_mut(version) else {
            log::warn!("{version}: completion for unknown version ignored");
            return false;
        };
        if !state.is_pending() {
            log::warn!(
                "{version}: completion ignored in state {}",
                state.label()
            );
            return false;
        }

        *state = match result {
            Ok(artifact) => {
                log::debug!(
                    "{version}: pending -> ready ({} symbols)",
                    artifact.locations.len()
                );
                ArtifactState::Ready(Arc::new(artifact))
            }
            Err(err) => {
                log::warn!("{version}: generation failed: {err:#}");
                ArtifactState::Failed(err.to_string())
            }
        };
        true
    }

    pub fn state(&self, version: &Version) -> &ArtifactState {
        self.entries.get(version).unwrap_or(&ABSENT)
    }

    /// Side-effect free read: the ready artifact or the placeholder.
    pub fn snapshot(&self, version: &Version) -> Arc<SourceArtifact> {
        match self.entries.get(version) {
            Some(ArtifactState::Ready(artifact)) => Arc::clone(artifact),
            _ => Arc::clone(&self.placeholder),
        }
    }

    pub fn is_ready(&self, version: &Version) -> bool {
        self.state(version).is_ready()
    }

    /// Known versions in catalog order, followed by ones requested outside it.
    pub fn versions(&self) -> &[Version] {
        &self.order
    }

    fn placeholder_request(&self, schedule: bool) -> ArtifactRequest {
        ArtifactRequest {
            artifact: Arc::clone(&self.placeholder),
            schedule,
        }
    }
}
