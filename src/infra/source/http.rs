use anyhow::{Context, Result};
use async_trait::async_trait;

use super::traits::DefinitionSource;
use crate::domain::Version;

pub struct HttpDefinitionSource {
    client: reqwest::Client,
    index_url: String,
    definition_url: String,
    edition: String,
}

impl HttpDefinitionSource {
    pub fn new(
        index_url: impl Into<String>,
        definition_url: impl Into<String>,
        edition: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            index_url: index_url.into(),
            definition_url: definition_url.into(),
            edition: edition.into(),
        }
    }

    pub fn definition_url(&self, version: &Version) -> String {
        expand_definition_url(&self.definition_url, &self.edition, version)
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("GET {url}"))
    }
}

/// Fills the `{edition}` and `{version}` placeholders of a definition URL template.
pub fn expand_definition_url(template: &str, edition: &str, version: &Version) -> String {
    template
        .replace("{edition}", edition)
        .replace("{version}", version.as_str())
}

#[async_trait]
impl DefinitionSource for HttpDefinitionSource {
    fn id(&self) -> &str {
        "http"
    }

    async fn fetch_index(&self) -> Result<serde_json::Value> {
        self.get(&self.index_url)
            .await?
            .json()
            .await
            .context("decode version index json")
    }

    async fn fetch_definition(&self, version: &Version) -> Result<String> {
        let url = self.definition_url(version);
        log::debug!("fetching definition for {version} from {url}");
        self.get(&url)
            .await?
            .text()
            .await
            .with_context(|| format!("read definition body for {version}"))
    }
}
