//! Version catalog: derives the distinct version identifiers from the index.

use serde_json::Value;
use std::collections::HashSet;

use crate::domain::{CatalogError, Version};
use crate::infra::source::DefinitionSource;

/// Fetches the index and extracts the versions of `edition`.
pub async fn list_versions(
    source: &dyn DefinitionSource,
    edition: &str,
) -> Result<Vec<Version>, CatalogError> {
    let index = source.fetch_index().await.map_err(CatalogError::Fetch)?;
    extract_versions(&index, edition)
}

/// Reads `index[edition]`, takes each entry's `protocol` path (`pc/1.12.2`) and keeps
/// the segment after the first `/`. Entries without a usable path are skipped and
/// duplicates collapse onto their first occurrence. Callers must not rely on the
/// resulting order.
pub fn extract_versions(index: &Value, edition: &str) -> Result<Vec<Version>, CatalogError> {
    let Some(entries) = index.get(edition).and_then(Value::as_object) else {
        return Err(CatalogError::MissingEdition {
            edition: edition.to_string(),
        });
    };

    let mut seen = HashSet::new();
    let versions = entries
        .values()
        .filter_map(|entry| entry.get("protocol").and_then(Value::as_str))
        .filter_map(|path| path.split('/').nth(1))
        .filter(|id| !id.is_empty())
        .filter(|id| seen.insert(id.to_string()))
        .map(Version::from)
        .collect();
    Ok(versions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_distinct_protocol_versions() {
        let index = json!({
            "pc": {
                "1.8": { "protocol": "pc/1.8", "items": "pc/1.8" },
                "1.8.9": { "protocol": "pc/1.8", "items": "pc/1.8" },
                "1.12.2": { "protocol": "pc/1.12.2" },
                "0.30c": { "items": "pc/0.30c" }
            },
            "bedrock": {
                "1.16.201": { "protocol": "bedrock/1.16.201" }
            }
        });

        let mut versions = extract_versions(&index, "pc").unwrap();
        versions.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(versions, vec![Version::from("1.12.2"), Version::from("1.8")]);
    }

    #[test]
    fn skips_paths_without_version_segment() {
        let index = json!({
            "pc": {
                "a": { "protocol": "pc" },
                "b": { "protocol": "pc/" },
                "c": { "protocol": 12 },
                "d": { "protocol": "pc/1.20.4/extra" }
            }
        });
        assert_eq!(
            extract_versions(&index, "pc").unwrap(),
            vec![Version::from("1.20.4")]
        );
    }

    #[test]
    fn missing_edition_is_an_error() {
        let err = extract_versions(&json!({ "bedrock": {} }), "pc").unwrap_err();
        assert!(matches!(err, CatalogError::MissingEdition { edition } if edition == "pc"));
    }
}
