use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::BumpCategory;
use crate::error::{RegistryVersionError, Result};
use crate::scan::ScanOptions;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "registry-version.toml";

/// Represents the complete configuration for registry-version.
///
/// Contains where the published registry lives, where local templates are
/// found, and how versions are bumped.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub templates: TemplatesConfig,

    #[serde(default)]
    pub versioning: VersioningConfig,
}

/// Returns the default HTTP timeout in seconds.
fn default_timeout_secs() -> u64 {
    30
}

/// Returns the default templates directory.
fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

/// Location of the previously published registry.
///
/// Both sources are optional; with neither set the registry is treated as
/// never published.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RegistryConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub cache_path: Option<PathBuf>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl RegistryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            url: None,
            cache_path: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Where local templates are discovered.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TemplatesConfig {
    #[serde(default = "default_templates_dir")]
    pub dir: PathBuf,

    #[serde(default)]
    pub required_file: Option<String>,
}

impl TemplatesConfig {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            required_file: self.required_file.clone(),
        }
    }
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        TemplatesConfig {
            dir: default_templates_dir(),
            required_file: None,
        }
    }
}

/// Version bump settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct VersioningConfig {
    #[serde(default)]
    pub default_bump: BumpCategory,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `registry-version.toml` in current directory
/// 3. `.registry-version.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(Config)` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    tracing::debug!("Loading configuration from {}", path.display());
    let config_str = fs::read_to_string(&path).map_err(|e| {
        RegistryVersionError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;

    parse_config(&config_str)
        .map_err(|e| RegistryVersionError::config(format!("'{}': {}", path.display(), e)))
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(config_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.registry.url, None);
        assert_eq!(config.registry.timeout_secs, 30);
        assert_eq!(config.templates.dir, PathBuf::from("templates"));
        assert_eq!(config.versioning.default_bump, BumpCategory::Minor);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config(
            r#"
[registry]
url = "https://example.org/registry.json"

[versioning]
default_bump = "patch"
"#,
        )
        .unwrap();
        assert_eq!(
            config.registry.url.as_deref(),
            Some("https://example.org/registry.json")
        );
        assert_eq!(config.registry.timeout(), Duration::from_secs(30));
        assert_eq!(config.versioning.default_bump, BumpCategory::Patch);
        assert_eq!(config.templates, TemplatesConfig::default());
    }

    #[test]
    fn test_unknown_bump_rejected() {
        assert!(parse_config("[versioning]\ndefault_bump = \"huge\"\n").is_err());
    }
}
