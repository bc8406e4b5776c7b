//! Application layer (use-cases, policies).
//!
//! Orchestrates the version catalog, the per-version artifact cache and the
//! highlight coordinator without depending on a concrete display or transport.

pub mod artifact_store;
pub mod catalog;
pub mod highlight;
pub mod pipeline;

pub use artifact_store::{ArtifactRequest, VersionArtifactStore};
pub use highlight::{HighlightCoordinator, PaneSnapshot, highlight};
