//! Structured metadata attached to log events and emitters.
//!
//! Metadata is a string-keyed mapping whose values are either scalar
//! strings or nested mappings. Rendering is permissive: any value turns
//! into a parameter string via [`std::fmt::Display`], so a log call can
//! never be rejected for the shape of its metadata.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Mapping from metadata keys to values.
pub type Metadata = HashMap<String, MetadataValue>;

/// A metadata value: a scalar string or a nested mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// A scalar string value.
    String(String),
    /// A nested string-keyed mapping.
    Map(Metadata),
}

impl MetadataValue {
    /// Return the scalar string, if this value is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            Self::Map(_) => None,
        }
    }

    /// Return the nested mapping, if this value is one.
    #[must_use]
    pub const fn as_map(&self) -> Option<&Metadata> {
        match self {
            Self::String(_) => None,
            Self::Map(map) => Some(map),
        }
    }
}

impl fmt::Display for MetadataValue {
    /// Scalars render verbatim; maps render as `{key=value, ...}` with
    /// entries sorted by key so nested rendering is deterministic.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(v) => write!(f, "{v}"),
            Self::Map(map) => {
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Metadata> for MetadataValue {
    fn from(value: Metadata) -> Self {
        Self::Map(value)
    }
}

impl From<serde_json::Value> for MetadataValue {
    /// Convert a JSON value, stringifying scalars other than strings via
    /// their JSON rendering.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
            other => Self::String(other.to_string()),
        }
    }
}
