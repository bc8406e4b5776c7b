use anyhow::Result;
use async_trait::async_trait;

/// Turns a raw definition document into generated source and a location index.
///
/// Implementations are stateless: the same input always yields the same output.
#[async_trait]
pub trait ConversionService: Send + Sync {
    fn id(&self) -> &str;

    /// Renders the raw definition JSON into source text.
    async fn generate(&self, raw_definition: &str) -> Result<String>;

    /// Returns a JSON array of `[symbolKey, [startLine, startCol, endLine, endCol]]`
    /// for the given source, zero-based and half-open.
    async fn extract_locations(&self, source_text: &str) -> Result<String>;
}
