use crate::domain::Version;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadCatalog,
    GenerateArtifact { version: Version },
}
