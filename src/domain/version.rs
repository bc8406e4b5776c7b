use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one revision of the protocol definition (e.g. `1.12.2`).
///
/// Equality is exact string match; no numeric ordering is implied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Version {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for Version {
    fn from(id: String) -> Self {
        Self(id)
    }
}
