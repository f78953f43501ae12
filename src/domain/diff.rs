use std::collections::HashSet;

use serde::Serialize;

use super::snapshot::RegistrySnapshot;
use super::version::{bump, BumpCategory, INITIAL_VERSION};

/// Outcome of comparing the published registry with the local templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub base_version: String,
    pub next_version: String,
    pub new_identifiers: Vec<String>,
}

impl DiffResult {
    /// Whether new templates warrant publishing a bumped version
    pub fn has_changes(&self) -> bool {
        !self.new_identifiers.is_empty()
    }
}

/// Decides the next registry version from the previous snapshot and the
/// local template identifiers.
///
/// - Without a previous snapshot the base is `1.0.0` and every local
///   identifier is new.
/// - New identifiers keep the order of `local`; duplicates are passed
///   through as given.
/// - Any number of new identifiers bumps exactly once by `category`.
/// - Identifiers missing from `local` are ignored: removals never bump and
///   are never reported.
/// - Without new identifiers the base version is returned verbatim.
pub fn evaluate(
    previous: Option<&RegistrySnapshot>,
    local: &[String],
    category: BumpCategory,
) -> DiffResult {
    let base_version = previous
        .map(|snapshot| snapshot.version.clone())
        .unwrap_or_else(|| INITIAL_VERSION.to_string());

    let new_identifiers: Vec<String> = match previous {
        Some(snapshot) => local
            .iter()
            .filter(|id| !snapshot.contains(id))
            .cloned()
            .collect(),
        None => local.to_vec(),
    };

    let next_version = if new_identifiers.is_empty() {
        base_version.clone()
    } else {
        bump(&base_version, category)
    };

    DiffResult {
        base_version,
        next_version,
        new_identifiers,
    }
}

/// Identifiers published previously but missing locally, sorted.
///
/// Informational only; [`evaluate`] never takes removals into account.
pub fn removed_identifiers(previous: Option<&RegistrySnapshot>, local: &[String]) -> Vec<String> {
    let Some(snapshot) = previous else {
        return Vec::new();
    };

    let local: HashSet<&str> = local.iter().map(String::as_str).collect();
    let mut removed: Vec<String> = snapshot
        .templates
        .iter()
        .filter(|id| !local.contains(id.as_str()))
        .cloned()
        .collect();
    removed.sort();
    removed
}
