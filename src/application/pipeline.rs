//! Fetch + convert pipeline producing one version's artifact.

use anyhow::{Context, Result};

use crate::domain::{ArtifactError, LocationEntry, Range, SourceArtifact, Version};
use crate::infra::convert::ConversionService;
use crate::infra::source::DefinitionSource;

pub async fn generate_artifact(
    source: &dyn DefinitionSource,
    converter: &dyn ConversionService,
    version: &Version,
) -> Result<SourceArtifact, ArtifactError> {
    let raw = source
        .fetch_definition(version)
        .await
        .map_err(|source| ArtifactError::DefinitionFetch {
            version: version.clone(),
            source,
        })?;

    let conversion_error = |source: anyhow::Error| ArtifactError::Conversion {
        version: version.clone(),
        source,
    };
    let text = converter.generate(&raw).await.map_err(conversion_error)?;
    let locations_json = converter
        .extract_locations(&text)
        .await
        .map_err(conversion_error)?;
    let locations = parse_locations(&locations_json).map_err(conversion_error)?;

    log::info!(
        "generated {version} with {} ({} lines, {} symbols)",
        converter.id(),
        text.lines().count(),
        locations.len()
    );
    Ok(SourceArtifact::new(text, locations))
}

/// Parses `[[key, [startLine, startCol, endLine, endCol]], ...]`, keeping order.
pub fn parse_locations(json: &str) -> Result<Vec<LocationEntry>> {
    let raw: Vec<(String, [u32; 4])> =
        serde_json::from_str(json).context("parse location index json")?;
    Ok(raw
        .into_iter()
        .map(|(key, range)| LocationEntry::new(key, Range::from(range)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticSource {
        fail: bool,
    }

    #[async_trait]
    impl DefinitionSource for StaticSource {
        fn id(&self) -> &str {
            "static"
        }

        async fn fetch_index(&self) -> Result<serde_json::Value> {
            Ok(serde_json::json!({}))
        }

        async fn fetch_definition(&self, version: &Version) -> Result<String> {
            if self.fail {
                anyhow::bail!("404 for {version}");
            }
            Ok(format!("definition {version}"))
        }
    }

    #[derive(Default)]
    struct EchoConverter {
        locations: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ConversionService for EchoConverter {
        fn id(&self) -> &str {
            "echo"
        }

        async fn generate(&self, raw_definition: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("// {raw_definition}\n"))
        }

        async fn extract_locations(&self, _source_text: &str) -> Result<String> {
            Ok(self.locations.to_string())
        }
    }

    #[tokio::test]
    async fn builds_artifact_from_source_and_converter() {
        let converter = EchoConverter {
            locations: r#"[["login_start", [10, 0, 10, 40]], ["keep_alive", [2, 0, 4, 2]]]"#,
            ..Default::default()
        };
        let artifact = generate_artifact(
            &StaticSource { fail: false },
            &converter,
            &Version::from("1.12.2"),
        )
        .await
        .expect("artifact");

        assert_eq!(artifact.text, "// definition 1.12.2\n");
        let keys: Vec<_> = artifact.symbol_keys().collect();
        assert_eq!(keys, vec!["login_start", "keep_alive"]);
        assert_eq!(artifact.locations[0].range, Range::new(10, 0, 10, 40));
    }

    #[tokio::test]
    async fn fetch_failure_is_definition_error() {
        let converter = EchoConverter {
            locations: "[]",
            ..Default::default()
        };
        let err = generate_artifact(&StaticSource { fail: true }, &converter, &Version::from("1.8"))
            .await
            .unwrap_err();
        assert!(matches!(err, ArtifactError::DefinitionFetch { .. }));
        assert_eq!(converter.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn malformed_locations_are_conversion_error() {
        let converter = EchoConverter {
            locations: r#"[["login_start", [1, 2]]]"#,
            ..Default::default()
        };
        let err = generate_artifact(&StaticSource { fail: false }, &converter, &Version::from("1.8"))
            .await
            .unwrap_err();
        assert!(matches!(err, ArtifactError::Conversion { ref version, .. } if version.as_str() == "1.8"));
    }

    #[test]
    fn max_coordinates_convert_without_overflow() {
        let entries = parse_locations(r#"[["x", [4294967295, 0, 4294967295, 0]]]"#)
            .expect("entries");
        let range = crate::domain::DisplayRange::from(entries[0].range);
        assert_eq!(range.start_line_number, u32::MAX);
        assert_eq!(range.end_column, 1);
    }

    #[test]
    fn parse_keeps_duplicates_in_order() {
        let entries =
            parse_locations(r#"[["a", [0, 0, 0, 1]], ["a", [4, 0, 4, 1]]]"#).expect("entries");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].range.start_line, 4);
    }
}
