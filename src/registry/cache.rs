//! Local copy of the published registry.

use std::fs;
use std::path::Path;

use crate::domain::{RegistrySnapshot, SnapshotRecord};
use crate::error::Result;

/// Reads a snapshot record from `path`; a missing file means no snapshot.
pub fn load_cached_snapshot(path: &Path) -> Result<Option<RegistrySnapshot>> {
    if !path.exists() {
        tracing::debug!("No cached registry at {}", path.display());
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    RegistrySnapshot::from_json(&contents).map(Some)
}

/// Writes a snapshot record as pretty JSON, creating parent directories.
pub fn write_snapshot(path: &Path, record: &SnapshotRecord) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut json = record.to_json_pretty()?;
    json.push('\n');
    fs::write(path, json)?;
    tracing::debug!("Wrote registry snapshot to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryVersionError;
    use tempfile::TempDir;

    #[test]
    fn test_missing_cache_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = load_cached_snapshot(&dir.path().join("registry.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("registry.json");
        let ids = vec!["homepage".to_string(), "jellyfin-server".to_string()];

        write_snapshot(&path, &SnapshotRecord::new("1.2.0", &ids)).unwrap();
        let loaded = load_cached_snapshot(&path).unwrap().unwrap();

        assert_eq!(loaded, RegistrySnapshot::new("1.2.0", ["homepage", "jellyfin-server"]));
    }

    #[test]
    fn test_corrupt_cache_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registry.json");
        fs::write(&path, "not json").unwrap();

        let err = load_cached_snapshot(&path).unwrap_err();
        assert!(matches!(err, RegistryVersionError::Snapshot(_)));
    }
}
