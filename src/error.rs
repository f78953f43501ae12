use thiserror::Error;

/// Unified error type for registry-version operations
///
/// Only the collaborators around the version decision can fail; `bump` and
/// `evaluate` are total and never produce one of these.
#[derive(Error, Debug)]
pub enum RegistryVersionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template scan failed: {0}")]
    Scan(String),

    #[error("Registry fetch failed: {0}")]
    Fetch(String),

    #[error("Invalid registry snapshot: {0}")]
    Snapshot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in registry-version
pub type Result<T> = std::result::Result<T, RegistryVersionError>;

impl RegistryVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        RegistryVersionError::Config(msg.into())
    }

    /// Create a scan error with context
    pub fn scan(msg: impl Into<String>) -> Self {
        RegistryVersionError::Scan(msg.into())
    }

    /// Create a fetch error with context
    pub fn fetch(msg: impl Into<String>) -> Self {
        RegistryVersionError::Fetch(msg.into())
    }

    /// Create a snapshot error with context
    pub fn snapshot(msg: impl Into<String>) -> Self {
        RegistryVersionError::Snapshot(msg.into())
    }
}

impl From<reqwest::Error> for RegistryVersionError {
    fn from(err: reqwest::Error) -> Self {
        RegistryVersionError::Fetch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistryVersionError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RegistryVersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: RegistryVersionError = json_err.into();
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (RegistryVersionError::config("x"), "Configuration error"),
            (RegistryVersionError::scan("x"), "Template scan failed"),
            (RegistryVersionError::fetch("x"), "Registry fetch failed"),
            (RegistryVersionError::snapshot("x"), "Invalid registry snapshot"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            RegistryVersionError::config(""),
            RegistryVersionError::scan(""),
            RegistryVersionError::snapshot(""),
        ];

        for err in errors {
            // Even with empty message, the error type prefix should be present
            assert!(!err.to_string().is_empty());
        }
    }
}
