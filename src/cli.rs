//! Command-line interface definitions.
//!
//! With no scan directories on the command line, `filecat` runs its
//! interactive session (prompting for the catalogue path, scan targets,
//! and commit decisions). With directories given, it runs non-interactive:
//! each directory is scanned and committed in turn, and the report is
//! written only when `--report` is passed.
//!
//! # Example
//!
//! ```bash
//! # Interactive session
//! filecat
//!
//! # Batch-scan two trees into a named catalogue, then export the report
//! filecat --catalogue media.json --report dupes.csv ~/Photos ~/Backup
//!
//! # Verbose mode for debugging
//! filecat -v ~/Downloads
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Catalogue files by content hash and report duplicates across scans.
#[derive(Debug, Parser)]
#[command(name = "filecat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Catalogue storage path (prompted for when omitted in interactive mode)
    #[arg(short, long, value_name = "PATH", env = "FILECAT_CATALOGUE")]
    pub catalogue: Option<PathBuf>,

    /// Duplicate report destination (rows are appended; header written once)
    #[arg(short, long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Directories to scan non-interactively; each scan is committed
    #[arg(value_name = "DIR")]
    pub paths: Vec<PathBuf>,
}
