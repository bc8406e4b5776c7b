use crate::domain::{
    ArtifactError, CatalogError, HighlightSelection, SourceArtifact, Version,
};

#[derive(Debug)]
pub enum Action {
    Catalog(CatalogAction),
    Compare(CompareAction),
    Async(AsyncAction),
}

#[derive(Debug)]
pub enum CatalogAction {
    LoadRequested,
}

#[derive(Debug)]
pub enum CompareAction {
    /// User picked the baseline version; a failed version is retried.
    SelectOriginal(Version),
    /// User picked the reference version; a failed version is retried.
    SelectModified(Version),
    SelectHighlight(HighlightSelection),
    /// Render-time request for a version's artifact.
    RequestVersion(Version),
}

#[derive(Debug)]
pub enum AsyncAction {
    VersionsLoaded(Result<Vec<Version>, CatalogError>),
    ArtifactGenerated {
        version: Version,
        result: Result<SourceArtifact, ArtifactError>,
    },
}
