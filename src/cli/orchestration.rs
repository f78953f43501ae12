//! Main workflow orchestration logic
//!
//! Gathers the inputs of the version decision (previous snapshot, local
//! templates), evaluates them and optionally writes the next snapshot.
//! Kept apart from `main.rs` so it can run without clap or a network.

use std::path::PathBuf;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::version::parse_leading_triple;
use crate::domain::{evaluate, removed_identifiers, BumpCategory, DiffResult, SnapshotRecord};
use crate::error::Result;
use crate::registry::{resolve_previous, write_snapshot, SnapshotFetcher, SnapshotOrigin, SourceOptions};
use crate::scan::{scan_templates, ScanOptions};

/// Arguments for the version workflow
///
/// Built from the configuration file, then overridden by CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowArgs {
    /// Where the previous snapshot is loaded from
    pub source: SourceOptions,

    /// Directory holding one folder per template
    pub templates_dir: PathBuf,

    /// Which folders count as templates
    pub scan: ScanOptions,

    /// Bump applied when new templates appear
    pub bump: BumpCategory,

    /// Where to write the next snapshot record
    pub output: Option<PathBuf>,

    /// Write the output even when the version did not change
    pub write_unchanged: bool,
}

impl WorkflowArgs {
    pub fn from_config(config: &Config) -> Self {
        WorkflowArgs {
            source: SourceOptions::from(&config.registry),
            templates_dir: config.templates.dir.clone(),
            scan: config.templates.scan_options(),
            bump: config.versioning.default_bump,
            output: None,
            write_unchanged: false,
        }
    }
}

/// Result of a completed workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The version decision
    pub diff: DiffResult,

    /// Where the previous snapshot came from
    pub origin: SnapshotOrigin,

    /// Non-fatal conditions met on the way
    pub warnings: Vec<BoundaryWarning>,

    /// Published templates missing locally (informational)
    pub removed: Vec<String>,

    /// Path of the snapshot record written, if any
    pub written: Option<PathBuf>,
}

/// Main version workflow
///
/// 1. Resolve the previous snapshot (remote, then cache)
/// 2. Scan local templates
/// 3. Evaluate the diff and decide the next version
/// 4. Write the next snapshot record if requested
pub fn run_workflow(args: &WorkflowArgs, fetcher: &dyn SnapshotFetcher) -> Result<WorkflowResult> {
    let resolved = resolve_previous(&args.source, fetcher)?;
    let mut warnings = resolved.warnings;

    let local = scan_templates(&args.templates_dir, &args.scan)?;
    if local.is_empty() {
        warnings.push(BoundaryWarning::NoTemplatesFound {
            dir: args.templates_dir.display().to_string(),
        });
    }

    let previous = resolved.snapshot.as_ref();
    let diff = evaluate(previous, &local, args.bump);
    tracing::debug!(
        "Evaluated {} local templates: {} -> {} ({} new)",
        local.len(),
        diff.base_version,
        diff.next_version,
        diff.new_identifiers.len()
    );

    if diff.has_changes() && parse_leading_triple(&diff.base_version).is_none() {
        warnings.push(BoundaryWarning::MalformedBaseVersion {
            version: diff.base_version.clone(),
        });
    }

    let removed = removed_identifiers(previous, &local);
    if !removed.is_empty() {
        warnings.push(BoundaryWarning::RemovedTemplates {
            identifiers: removed.clone(),
        });
    }

    let written = match &args.output {
        Some(path) if diff.has_changes() || args.write_unchanged => {
            write_snapshot(path, &SnapshotRecord::new(diff.next_version.clone(), &local))?;
            Some(path.clone())
        }
        _ => None,
    };

    Ok(WorkflowResult {
        diff,
        origin: resolved.origin,
        warnings,
        removed,
        written,
    })
}
