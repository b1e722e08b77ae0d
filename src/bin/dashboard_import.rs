//! dashboard-import: Turn an exported dashboard into a reusable template
//!
//! Resets `__inputs`, drops `version` and nulls out prometheus datasource
//! bindings, then writes `<title>.json` into the `dashboards` directory next to
//! the directory holding this tool.
//!
//! Usage:
//!   dashboard-import exported.json
//!
//!   # Show which datasources were cleared
//!   RUST_LOG=debug dashboard-import exported.json

use anyhow::{Context, Result};
use clap::Parser;
use dashboard_import::{dashboard_title, read_dashboard, DashboardTemplate, SanitizeConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

// The single argument is always a path, even when it looks like a flag
#[derive(Parser, Debug)]
#[command(name = "dashboard-import")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Dashboard JSON file to sanitize
    #[arg(value_name = "DASHBOARD", allow_hyphen_values = true)]
    input: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Ok(args) = Args::try_parse() else {
        println!("Usage: dashboard-import <dashboard.json>");
        return ExitCode::FAILURE;
    };

    match run(&args.input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(input: &Path) -> Result<()> {
    println!("Reading JSON file: {}", input.display());
    let doc = read_dashboard(input)?;
    println!(
        "Parsed dashboard title: {}",
        dashboard_title(&doc).unwrap_or_default()
    );

    let template = DashboardTemplate::from_document(doc, SanitizeConfig::default())
        .with_context(|| format!("Failed to sanitize {}", input.display()))?;
    println!("{}", template.stats());

    let path = template.write()?;
    log::info!("template written to {}", path.display());

    Ok(())
}
