use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryVersionError, Result};

/// Version used when nothing was published yet, and the fallback for
/// strings that are not a version at all.
pub const INITIAL_VERSION: &str = "1.0.0";

/// Leading numeric triple, optionally followed by a `.` or `-` suffix
/// (pre-release or build metadata).
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.(\d+)\.(\d+)([.-].*)?$").expect("version pattern is valid")
});

/// Which version component a bump increments
///
/// Parsing is case-insensitive everywhere: `FromStr`, serde and clap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum BumpCategory {
    Major,
    #[default]
    Minor,
    Patch,
}

impl BumpCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpCategory::Major => "major",
            BumpCategory::Minor => "minor",
            BumpCategory::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpCategory {
    type Err = RegistryVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(BumpCategory::Major),
            "minor" => Ok(BumpCategory::Minor),
            "patch" => Ok(BumpCategory::Patch),
            other => Err(RegistryVersionError::config(format!(
                "Unknown bump category: {} (expected: major|minor|patch)",
                other
            ))),
        }
    }
}

impl TryFrom<String> for BumpCategory {
    type Error = RegistryVersionError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Extracts the leading `MAJOR.MINOR.PATCH` triple, ignoring any suffix.
///
/// Returns `None` when the string does not start with a numeric triple or a
/// component does not fit in a `u64`.
pub fn parse_leading_triple(version: &str) -> Option<Version> {
    let captures = VERSION_PATTERN.captures(version)?;
    let major = captures.get(1)?.as_str().parse::<u64>().ok()?;
    let minor = captures.get(2)?.as_str().parse::<u64>().ok()?;
    let patch = captures.get(3)?.as_str().parse::<u64>().ok()?;

    Some(Version::new(major, minor, patch))
}

/// Bumps a version string according to the bump category.
///
/// Increments the selected component and resets lower components to 0:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
///
/// Any pre-release or build suffix is dropped. Strings that do not start
/// with a numeric triple yield [`INITIAL_VERSION`] instead of an error, so
/// the result is not always derived from the input.
///
/// # Example
/// ```
/// use registry_version::domain::version::{bump, BumpCategory};
///
/// assert_eq!(bump("1.1.0", BumpCategory::Major), "2.0.0");
/// assert_eq!(bump("1.2.3-beta.1", BumpCategory::Minor), "1.3.0");
/// assert_eq!(bump("latest", BumpCategory::Patch), "1.0.0");
/// ```
pub fn bump(version: &str, category: BumpCategory) -> String {
    let Some(mut parsed) = parse_leading_triple(version) else {
        return INITIAL_VERSION.to_string();
    };

    match category {
        BumpCategory::Major => {
            parsed.major = parsed.major.saturating_add(1);
            parsed.minor = 0;
            parsed.patch = 0;
        }
        BumpCategory::Minor => {
            parsed.minor = parsed.minor.saturating_add(1);
            parsed.patch = 0;
        }
        BumpCategory::Patch => {
            parsed.patch = parsed.patch.saturating_add(1);
        }
    }

    parsed.to_string()
}
