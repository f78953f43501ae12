use std::fmt;

/// Non-fatal conditions met while gathering inputs for the version decision.
/// These are reported to the user but never stop the evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The published registry could not be loaded from a source
    RegistryUnavailable { source: String, reason: String },
    /// The base version is not a `MAJOR.MINOR.PATCH` triple, so a bump resets to 1.0.0
    MalformedBaseVersion { version: String },
    /// Published templates no longer present locally
    RemovedTemplates { identifiers: Vec<String> },
    /// The templates directory holds no templates
    NoTemplatesFound { dir: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::RegistryUnavailable { source, reason } => {
                write!(f, "Could not load registry from '{}': {}", source, reason)
            }
            BoundaryWarning::MalformedBaseVersion { version } => {
                write!(
                    f,
                    "Published version '{}' is not MAJOR.MINOR.PATCH; bumping falls back to 1.0.0",
                    version
                )
            }
            BoundaryWarning::RemovedTemplates { identifiers } => {
                let shown: Vec<&str> = identifiers.iter().take(5).map(String::as_str).collect();
                let more = identifiers.len().saturating_sub(shown.len());
                write!(
                    f,
                    "{} published template(s) missing locally (no bump): {}",
                    identifiers.len(),
                    shown.join(", ")
                )?;
                if more > 0 {
                    write!(f, " and {} more", more)?;
                }
                Ok(())
            }
            BoundaryWarning::NoTemplatesFound { dir } => {
                write!(f, "No templates found in '{}'", dir)
            }
        }
    }
}
