//! Local template discovery

use std::fs;
use std::path::Path;

use crate::domain::normalize_identifier;
use crate::error::{RegistryVersionError, Result};

/// Options controlling which folders count as templates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOptions {
    /// File that must exist inside a folder for it to count (e.g. `docker-compose.yml`)
    pub required_file: Option<String>,
}

/// Lists template identifiers found in `dir`.
///
/// Every non-hidden subdirectory is a template, named by its normalized
/// folder name. Identifiers are sorted; collisions after normalization are
/// kept as duplicates.
///
/// # Errors
/// * `Scan` - If `dir` does not exist, is not a directory, or cannot be read
pub fn scan_templates(dir: &Path, options: &ScanOptions) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(RegistryVersionError::scan(format!(
            "'{}' is not a directory",
            dir.display()
        )));
    }

    let entries = fs::read_dir(dir).map_err(|e| unreadable(dir, e))?;

    let mut identifiers = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| unreadable(dir, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        if let Some(required) = &options.required_file {
            if !path.join(required).is_file() {
                tracing::debug!("Skipping '{}': no {}", name, required);
                continue;
            }
        }

        identifiers.push(normalize_identifier(&name));
    }

    identifiers.sort();
    tracing::debug!(
        "Found {} templates in {}",
        identifiers.len(),
        dir.display()
    );
    Ok(identifiers)
}

fn unreadable(dir: &Path, err: std::io::Error) -> RegistryVersionError {
    RegistryVersionError::scan(format!("cannot read '{}': {}", dir.display(), err))
}
