//! Session lifecycle over the catalogue.
//!
//! The [`SessionController`] owns the single live [`Catalogue`] for the
//! process and drives its state machine:
//!
//! - **Loaded**: the catalogue mirrors persisted storage (or is freshly
//!   seeded empty).
//! - **Scanned**: a walk has appended entries on top of the loaded state.
//! - `commit` persists the scanned catalogue, `discard` reloads storage and
//!   drops the scan's additions; both return to Loaded and zero the
//!   per-scan counters, so the counters only ever describe the most recent
//!   scan.
//!
//! The interactive loop is expressed as discrete decision points behind the
//! [`Console`] trait, so tests (or any other transport) can drive the same
//! state machine without a terminal.

pub mod console;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

pub use console::StdConsole;

use crate::catalogue::{Catalogue, CatalogueError};
use crate::report::DuplicateReport;
use crate::scanner::{LogObserver, ScanError, ScanStats, Scanner};

/// Outcome of the post-scan prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitDecision {
    /// Persist the scanned catalogue.
    Commit,
    /// Drop the scan's additions and reload storage.
    Discard,
    /// Leave the scan loop (uncommitted additions are discarded).
    Quit,
}

/// Discrete decision points of an interactive session.
///
/// Implementations supply the answers; the controller supplies the state
/// machine. [`StdConsole`] implements this over stdin/stdout.
pub trait Console {
    /// Where the catalogue should be stored; `default` is offered as the
    /// fallback for an empty answer.
    fn catalogue_path(&mut self, default: &Path) -> io::Result<PathBuf>;

    /// The next directory to scan, or `None` to end the scan loop.
    fn next_scan_target(&mut self) -> io::Result<Option<PathBuf>>;

    /// Commit or discard the scan that just found `duplicates` copies.
    fn commit_decision(&mut self, duplicates: u64) -> io::Result<CommitDecision>;

    /// Whether to export the duplicate report before exiting.
    fn wants_report(&mut self) -> io::Result<bool>;
}

/// Owns the live catalogue and runs scan/commit/discard cycles against it.
#[derive(Debug)]
pub struct SessionController {
    catalogue: Catalogue,
    storage: PathBuf,
    stats: ScanStats,
    scanner: Scanner,
}

impl SessionController {
    /// Open a session backed by the catalogue file at `storage`, seeding
    /// an empty catalogue if none exists yet. The session starts Loaded
    /// with counters zeroed.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogueError`] from the initial load.
    pub fn open(storage: impl Into<PathBuf>) -> Result<Self, CatalogueError> {
        let storage = storage.into();
        let catalogue = Catalogue::load_or_create(&storage)?;
        Ok(Self {
            catalogue,
            storage,
            stats: ScanStats::default(),
            scanner: Scanner::new(),
        })
    }

    /// The live catalogue.
    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Counters for the most recent scan (zeroed on commit and discard).
    #[must_use]
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Walk `root`, folding its files into the live catalogue.
    ///
    /// # Errors
    ///
    /// A [`ScanError`] aborts the walk at the failing file. Entries
    /// recorded before the failure stay in memory but reach storage only
    /// through a later [`Self::commit`]; [`Self::discard`] drops them.
    pub fn scan(&mut self, root: &Path) -> Result<ScanStats, ScanError> {
        let stats = self
            .scanner
            .scan(root, &mut self.catalogue, &mut LogObserver)?;
        self.stats = stats;
        Ok(stats)
    }

    /// Persist the catalogue, making scan results durable. Returns the
    /// session to Loaded and zeroes the counters.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogueError`] from the save; the in-memory
    /// catalogue is unchanged on failure.
    pub fn commit(&mut self) -> Result<(), CatalogueError> {
        self.catalogue.save(&self.storage)?;
        self.stats = ScanStats::default();
        Ok(())
    }

    /// Reload the last persisted catalogue, dropping everything added
    /// since. Returns the session to Loaded and zeroes the counters.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogueError`] from the reload.
    pub fn discard(&mut self) -> Result<(), CatalogueError> {
        self.catalogue = Catalogue::load(&self.storage)?;
        self.stats = ScanStats::default();
        Ok(())
    }

    /// Drive the full interactive loop: scan targets until the quit
    /// sentinel, commit or discard after each scan, then optionally export
    /// the duplicate report to `report_path`.
    ///
    /// Quitting at the commit prompt discards uncommitted additions first,
    /// so the report always derives from a loaded (persisted) state.
    ///
    /// # Errors
    ///
    /// The first scan, storage, or console error ends the session.
    pub fn run(&mut self, console: &mut dyn Console, report_path: &Path) -> anyhow::Result<()> {
        loop {
            let Some(target) = console.next_scan_target()? else {
                break;
            };
            let stats = self
                .scan(&target)
                .with_context(|| format!("scan of {} failed", target.display()))?;
            log::info!(
                "scan finished: {} new, {} duplicate files",
                stats.unique,
                stats.duplicates
            );
            match console.commit_decision(stats.duplicates)? {
                CommitDecision::Commit => self.commit()?,
                CommitDecision::Discard => {
                    log::info!("discarding changes");
                    self.discard()?;
                }
                CommitDecision::Quit => {
                    self.discard()?;
                    break;
                }
            }
        }

        if console.wants_report()? {
            let rows = DuplicateReport::new(&self.catalogue).append_to(report_path)?;
            log::info!("saved {} report rows to {}", rows, report_path.display());
        }
        Ok(())
    }
}
