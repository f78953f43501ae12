//! User interface module - terminal and JSON reports.
//!
//! - `formatter` - Human-readable output
//! - This module - Machine-readable output

use crate::domain::DiffResult;
use crate::error::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_report, display_status, display_success,
    format_boundary_warning, format_new_templates, format_version_change,
};

/// Renders the version decision as pretty JSON
/// (`baseVersion`, `nextVersion`, `newIdentifiers`).
pub fn render_json(diff: &DiffResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(diff)?)
}
