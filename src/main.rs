use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use registry_version::cli::{run_workflow, WorkflowArgs};
use registry_version::config;
use registry_version::domain::BumpCategory;
use registry_version::registry::HttpFetcher;
use registry_version::ui;

#[derive(clap::Parser, Debug)]
#[command(
    name = "registry-version",
    version,
    about = "Decide the next template registry version from newly added templates"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "URL of the published registry JSON")]
    registry: Option<String>,

    #[arg(long, help = "Local registry JSON used when the URL is unset or unreachable")]
    cache: Option<PathBuf>,

    #[arg(short, long, help = "Directory containing one folder per template")]
    templates: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_enum,
        ignore_case = true,
        help = "Version component to bump when templates are added"
    )]
    bump: Option<BumpCategory>,

    #[arg(short, long, help = "Write the next registry snapshot to this file")]
    output: Option<PathBuf>,

    #[arg(long, help = "Write the output file even when nothing changed")]
    write_unchanged: bool,

    #[arg(long, help = "Print the result as JSON")]
    json: bool,

    #[arg(long, help = "Exit with status 1 when a version bump is needed")]
    check: bool,

    #[arg(short, long, help = "Enable debug logging")]
    debug: bool,
}

/// Logs go to stderr so `--json` output stays parseable.
///
/// `--debug` wins over `RUST_LOG`; the default only shows warnings.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("registry_version=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("registry_version=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);
    tracing::debug!("registry-version starting with args: {:?}", args);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let config = config::load_config(args.config.as_deref())?;

    let mut workflow = WorkflowArgs::from_config(&config);
    if let Some(url) = &args.registry {
        workflow.source.url = Some(url.clone());
    }
    if let Some(cache) = &args.cache {
        workflow.source.cache_path = Some(cache.clone());
    }
    if let Some(dir) = &args.templates {
        workflow.templates_dir = dir.clone();
    }
    if let Some(bump) = args.bump {
        workflow.bump = bump;
    }
    workflow.output = args.output.clone();
    workflow.write_unchanged = args.write_unchanged;

    let fetcher = HttpFetcher::with_timeout(config.registry.timeout())?;
    let result = run_workflow(&workflow, &fetcher)?;

    if args.json {
        for warning in &result.warnings {
            ui::display_boundary_warning(warning);
        }
        println!("{}", ui::render_json(&result.diff)?);
    } else {
        ui::display_report(&result);
    }

    if args.check && result.diff.has_changes() {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}
