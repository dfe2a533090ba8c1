//! filecat - content-hash file cataloguing and duplicate reporting.
//!
//! Catalogs files under a directory tree, fingerprints each by content
//! hash (BLAKE3), and reports duplicates by comparing fingerprints across
//! repeated scans. The catalogue persists between runs; each scan's
//! additions are committed or discarded as a unit.

pub mod catalogue;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod scanner;
pub mod session;

use anyhow::Context as _;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::ExitCode;
use crate::report::DuplicateReport;
use crate::session::{Console as _, SessionController, StdConsole};

/// Run the application with parsed CLI arguments.
///
/// # Errors
///
/// Returns any error the session surfaces; the binary maps it to an exit
/// code in `main`.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);
    let config = Config::load();

    if cli.paths.is_empty() {
        run_interactive(&cli, &config)
    } else {
        run_batch(&cli, &config)
    }
}

/// Prompt-driven session: scan targets until the quit sentinel, decide
/// commit or discard after each scan, optionally export the report.
fn run_interactive(cli: &Cli, config: &Config) -> anyhow::Result<ExitCode> {
    println!("File Catalogue");
    println!("---------------------");

    let mut console = StdConsole::new();
    let storage = match &cli.catalogue {
        Some(path) => path.clone(),
        None => console.catalogue_path(&config.catalogue_path)?,
    };
    let report_path = cli
        .report
        .clone()
        .unwrap_or_else(|| config.report_path.clone());

    let mut session = SessionController::open(storage)?;
    session.run(&mut console, &report_path)?;
    Ok(ExitCode::Success)
}

/// Non-interactive session: scan and commit each directory in order, then
/// export the report when `--report` was given.
fn run_batch(cli: &Cli, config: &Config) -> anyhow::Result<ExitCode> {
    let storage = cli
        .catalogue
        .clone()
        .unwrap_or_else(|| config.catalogue_path.clone());
    let mut session = SessionController::open(storage)?;

    for dir in &cli.paths {
        let stats = session
            .scan(dir)
            .with_context(|| format!("scan of {} failed", dir.display()))?;
        log::info!(
            "{}: {} new, {} duplicate files",
            dir.display(),
            stats.unique,
            stats.duplicates
        );
        session.commit()?;
    }

    if let Some(report_path) = &cli.report {
        let rows = DuplicateReport::new(session.catalogue()).append_to(report_path)?;
        log::info!("saved {} report rows to {}", rows, report_path.display());
    }
    Ok(ExitCode::Success)
}
