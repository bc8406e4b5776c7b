//! Domain error types for protodiff.
//!
//! Catalog and artifact failures are recovered at their boundary (empty catalog,
//! `Failed` cache entry); highlight failures are reported to the caller.

use super::version::Version;
use thiserror::Error;

/// Failures while resolving the version catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to fetch version index: {0}")]
    Fetch(#[source] anyhow::Error),

    #[error("Version index has no `{edition}` collection")]
    MissingEdition { edition: String },
}

/// Failures while generating the artifact of one version.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to fetch definition for {version}: {source}")]
    DefinitionFetch {
        version: Version,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to convert definition for {version}: {source}")]
    Conversion {
        version: Version,
        #[source]
        source: anyhow::Error,
    },
}

/// Failures while resolving a highlight.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HighlightError {
    #[error("Symbol `{symbol}` not found in {version}")]
    SymbolNotFound { symbol: String, version: Version },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_error_names_version_and_cause() {
        let err = ArtifactError::Conversion {
            version: Version::from("1.8"),
            source: anyhow::anyhow!("bad json"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to convert definition for 1.8: bad json"
        );
    }

    #[test]
    fn highlight_error_names_symbol() {
        let err = HighlightError::SymbolNotFound {
            symbol: "login_start".into(),
            version: Version::from("1.21.1"),
        };
        assert_eq!(err.to_string(), "Symbol `login_start` not found in 1.21.1");
    }
}
