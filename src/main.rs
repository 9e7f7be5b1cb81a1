//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `top_sites_export` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use top_sites_export::initialization::init_logger_with;
use top_sites_export::{run_lookup, run_top_sites, Cli, Command, ExportReport, RunError};

#[tokio::main]
async fn main() -> Result<()> {
    // Load API keys from a .env file (if it exists), in the current directory
    // or next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    init_logger_with(cli.log_level.into(), cli.log_format)
        .context("Failed to initialize logger")?;

    let (result, output) = match &cli.command {
        Command::TopSites(config) => (run_top_sites(config).await, config.output.as_path()),
        Command::Lookup(config) => (run_lookup(config).await, config.output.as_path()),
    };

    match result {
        Ok(report) => {
            print_summary(&report, output);
            Ok(())
        }
        Err(e) if matches!(e.downcast_ref::<RunError>(), Some(RunError::UserAbort)) => {
            println!("Quit");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("top_sites_export error: {:#}", e);
            process::exit(1);
        }
    }
}

fn print_summary(report: &ExportReport, output: &Path) {
    println!(
        "Finished. Wrote {} row{} in {:.1}s",
        report.rows_written,
        if report.rows_written == 1 { "" } else { "s" },
        report.elapsed_seconds
    );
    println!("Output: {}", output.display());
}
