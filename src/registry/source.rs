//! Resolution of the previously published snapshot.

use std::fmt;
use std::path::PathBuf;

use super::cache::load_cached_snapshot;
use super::fetch::SnapshotFetcher;
use crate::boundary::BoundaryWarning;
use crate::config::RegistryConfig;
use crate::domain::RegistrySnapshot;
use crate::error::Result;

/// Where the previous snapshot came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotOrigin {
    Remote(String),
    Cache(PathBuf),
    /// No source held a snapshot; the registry was never published
    None,
}

impl fmt::Display for SnapshotOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotOrigin::Remote(url) => write!(f, "{}", url),
            SnapshotOrigin::Cache(path) => write!(f, "{}", path.display()),
            SnapshotOrigin::None => write!(f, "none (first publication)"),
        }
    }
}

/// Sources to try, remote first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceOptions {
    pub url: Option<String>,
    pub cache_path: Option<PathBuf>,
}

impl From<&RegistryConfig> for SourceOptions {
    fn from(config: &RegistryConfig) -> Self {
        SourceOptions {
            url: config.url.clone(),
            cache_path: config.cache_path.clone(),
        }
    }
}

/// Previous snapshot together with how it was obtained
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSnapshot {
    pub snapshot: Option<RegistrySnapshot>,
    pub origin: SnapshotOrigin,
    pub warnings: Vec<BoundaryWarning>,
}

/// Loads the previous snapshot.
///
/// The remote URL wins when it answers, even with "not published". A remote
/// failure is downgraded to a warning and the cache file is tried instead.
/// Errors reading the cache file are returned.
pub fn resolve_previous(
    options: &SourceOptions,
    fetcher: &dyn SnapshotFetcher,
) -> Result<ResolvedSnapshot> {
    let mut warnings = Vec::new();

    if let Some(url) = &options.url {
        match fetcher.fetch_snapshot(url) {
            Ok(snapshot) => {
                let origin = match snapshot {
                    Some(_) => SnapshotOrigin::Remote(url.clone()),
                    None => SnapshotOrigin::None,
                };
                return Ok(ResolvedSnapshot {
                    snapshot,
                    origin,
                    warnings,
                });
            }
            Err(e) => {
                tracing::warn!("Registry fetch from {} failed: {}", url, e);
                warnings.push(BoundaryWarning::RegistryUnavailable {
                    source: url.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    if let Some(path) = &options.cache_path {
        if let Some(snapshot) = load_cached_snapshot(path)? {
            tracing::debug!("Using cached registry {}", path.display());
            return Ok(ResolvedSnapshot {
                snapshot: Some(snapshot),
                origin: SnapshotOrigin::Cache(path.clone()),
                warnings,
            });
        }
    }

    Ok(ResolvedSnapshot {
        snapshot: None,
        origin: SnapshotOrigin::None,
        warnings,
    })
}
