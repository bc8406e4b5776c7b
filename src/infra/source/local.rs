use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

use super::traits::DefinitionSource;
use crate::domain::Version;

pub const INDEX_FILE: &str = "dataPaths.json";
pub const DEFINITION_FILE: &str = "protocol.json";

/// Reads a checked-out data directory: `<root>/dataPaths.json` and
/// `<root>/<edition>/<version>/protocol.json`.
pub struct LocalDefinitionSource {
    root: PathBuf,
    edition: String,
}

impl LocalDefinitionSource {
    pub fn new(root: impl Into<PathBuf>, edition: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            edition: edition.into(),
        }
    }

    pub fn definition_path(&self, version: &Version) -> PathBuf {
        self.root
            .join(&self.edition)
            .join(version.as_str())
            .join(DEFINITION_FILE)
    }
}

#[async_trait]
impl DefinitionSource for LocalDefinitionSource {
    fn id(&self) -> &str {
        "local"
    }

    async fn fetch_index(&self) -> Result<serde_json::Value> {
        let path = self.root.join(INDEX_FILE);
        let contents = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("read {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("parse {}", path.display()))
    }

    async fn fetch_definition(&self, version: &Version) -> Result<String> {
        let path = self.definition_path(version);
        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("read {}", path.display()))
    }
}
