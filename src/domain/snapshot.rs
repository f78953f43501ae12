use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{RegistryVersionError, Result};

/// Last known published state of the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySnapshot {
    pub version: String,
    pub templates: HashSet<String>,
}

impl RegistrySnapshot {
    /// Create a snapshot from a version and any iterable of identifiers
    pub fn new<I, S>(version: impl Into<String>, templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RegistrySnapshot {
            version: version.into(),
            templates: templates.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a snapshot from its JSON record form
    pub fn from_json(json: &str) -> Result<Self> {
        let record: SnapshotRecord = serde_json::from_str(json)
            .map_err(|e| RegistryVersionError::snapshot(e.to_string()))?;
        Ok(record.into())
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.templates.contains(identifier)
    }
}

/// One template entry in a serialized registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub id: String,
}

/// Serialized registry: `{"version": "...", "templates": [{"id": "..."}]}`
///
/// Extra fields a published registry carries (titles, descriptions, ...)
/// are ignored when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub version: String,
    #[serde(default)]
    pub templates: Vec<TemplateEntry>,
}

impl SnapshotRecord {
    /// Build a record keeping the first occurrence of each identifier in order
    pub fn new<'a>(version: impl Into<String>, identifiers: impl IntoIterator<Item = &'a String>) -> Self {
        let mut seen = HashSet::new();
        let templates = identifiers
            .into_iter()
            .filter(|id| seen.insert(id.as_str()))
            .map(|id| TemplateEntry { id: id.clone() })
            .collect();

        SnapshotRecord {
            version: version.into(),
            templates,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<SnapshotRecord> for RegistrySnapshot {
    fn from(record: SnapshotRecord) -> Self {
        RegistrySnapshot {
            version: record.version,
            templates: record.templates.into_iter().map(|t| t.id).collect(),
        }
    }
}
