use anyhow::Result;
use async_trait::async_trait;

use crate::domain::Version;

/// Read-only access to the version index and the per-version definition documents.
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    fn id(&self) -> &str;
    async fn fetch_index(&self) -> Result<serde_json::Value>;
    async fn fetch_definition(&self, version: &Version) -> Result<String>;
}
