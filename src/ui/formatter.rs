//! Pure formatting functions for UI output.
//!
//! `format_*` functions build text without printing; `display_*` functions
//! print it.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::WorkflowResult;
use crate::domain::DiffResult;

/// How many new templates are listed before summarizing the rest.
const MAX_LISTED: usize = 10;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().for_stderr(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Warning line shown on stderr, without styling.
pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("⚠ WARNING: {}", warning)
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", style(format_boundary_warning(warning)).yellow().for_stderr());
}

/// One-line summary of the version decision.
///
/// # Example
/// ```
/// use registry_version::domain::{evaluate, BumpCategory};
/// use registry_version::ui::formatter::format_version_change;
///
/// let diff = evaluate(None, &["homepage".to_string()], BumpCategory::Minor);
/// assert_eq!(format_version_change(&diff), "1.0.0 -> 1.1.0 (1 new template)");
/// ```
pub fn format_version_change(diff: &DiffResult) -> String {
    if !diff.has_changes() {
        return format!("{} (unchanged, no new templates)", diff.base_version);
    }

    let count = diff.new_identifiers.len();
    format!(
        "{} -> {} ({} new template{})",
        diff.base_version,
        diff.next_version,
        count,
        if count == 1 { "" } else { "s" }
    )
}

/// Lines listing new templates, capped at ten with a trailing summary.
pub fn format_new_templates(identifiers: &[String]) -> Vec<String> {
    let mut lines: Vec<String> = identifiers
        .iter()
        .take(MAX_LISTED)
        .map(|id| format!("  + {}", id))
        .collect();

    if identifiers.len() > MAX_LISTED {
        lines.push(format!(
            "  ... and {} more templates",
            identifiers.len() - MAX_LISTED
        ));
    }

    lines
}

/// Display the full report of a workflow run.
pub fn display_report(result: &WorkflowResult) {
    for warning in &result.warnings {
        display_boundary_warning(warning);
    }

    display_status(&format!("Previous registry: {}", result.origin));

    let diff = &result.diff;
    if diff.has_changes() {
        println!("\n{}", style("New templates:").bold());
        for line in format_new_templates(&diff.new_identifiers) {
            println!("{}", style(line).green());
        }
        println!();
        display_success(&format!(
            "Version bump: {}",
            format_version_change(diff)
        ));
    } else {
        display_status(&format!("Version: {}", format_version_change(diff)));
    }

    if let Some(path) = &result.written {
        display_success(&format!("Wrote registry snapshot to {}", path.display()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{evaluate, BumpCategory, RegistrySnapshot};

    fn ids(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("template-{}", i)).collect()
    }

    #[test]
    fn test_format_unchanged() {
        let snapshot = RegistrySnapshot::new("1.5.0", ["homepage"]);
        let diff = evaluate(Some(&snapshot), &["homepage".to_string()], BumpCategory::Minor);
        assert_eq!(
            format_version_change(&diff),
            "1.5.0 (unchanged, no new templates)"
        );
    }

    #[test]
    fn test_format_plural() {
        let diff = evaluate(None, &ids(3), BumpCategory::Major);
        assert_eq!(format_version_change(&diff), "1.0.0 -> 2.0.0 (3 new templates)");
    }

    #[test]
    fn test_format_new_templates_short() {
        let lines = format_new_templates(&ids(2));
        assert_eq!(lines, vec!["  + template-0", "  + template-1"]);
    }

    #[test]
    fn test_format_new_templates_truncated() {
        let lines = format_new_templates(&ids(13));
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[10], "  ... and 3 more templates");
    }

    #[test]
    fn test_format_boundary_warning() {
        let warning = BoundaryWarning::NoTemplatesFound {
            dir: "apps".to_string(),
        };
        assert_eq!(
            format_boundary_warning(&warning),
            "⚠ WARNING: No templates found in 'apps'"
        );
    }
}
