//! Directory scanning: traversal, fingerprinting, and classification.
//!
//! The scanner walks a directory tree, fingerprints every regular file,
//! and classifies each against the live [`Catalogue`](crate::catalogue::Catalogue)
//! as either the first occurrence of its content or an additional copy.
//!
//! # Architecture
//!
//! - [`walker`]: deterministic single-threaded traversal
//! - [`hasher`]: BLAKE3 content fingerprinting
//! - [`Scanner`]: the walk-hash-classify loop itself
//!
//! # Failure policy
//!
//! The scan is fail-fast: the first unreadable file or traversal error
//! aborts the whole walk and surfaces to the caller. Entries recorded
//! before the failure stay in the in-memory catalogue; nothing is rolled
//! back, and nothing reaches persistent storage unless the session layer
//! later commits.

pub mod hasher;
pub mod walker;

use std::path::{Path, PathBuf};

pub use hasher::{Fingerprint, Hasher};
pub use walker::Walker;

use crate::catalogue::{Catalogue, FileLocation};

/// Errors raised while hashing a single file.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The file was not found.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Any other I/O error while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl HashError {
    pub(crate) fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Errors that abort a directory walk.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied on a file or directory during traversal.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A path vanished or never existed.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// Any other traversal I/O error.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Hashing a visited file failed.
    #[error(transparent)]
    Hash(#[from] HashError),
}

/// Counters for a single scan.
///
/// Derived per-scan data; never persisted. The session layer resets these
/// whenever the catalogue returns to its loaded state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Files whose fingerprint was not previously in the catalogue.
    pub unique: u64,
    /// Files whose fingerprint was already recorded.
    pub duplicates: u64,
}

/// Receives duplicate notifications as the walk progresses.
pub trait ScanObserver {
    /// Called when `location` is an additional copy of already-catalogued
    /// content. `occurrence` is its 1-based index among the copies seen so
    /// far for `fingerprint` (the second copy reports 2).
    fn on_duplicate(&mut self, fingerprint: &Fingerprint, location: &FileLocation, occurrence: usize);
}

/// Observer that reports duplicates through the `log` facade.
#[derive(Debug, Default)]
pub struct LogObserver;

impl ScanObserver for LogObserver {
    fn on_duplicate(&mut self, _fingerprint: &Fingerprint, location: &FileLocation, occurrence: usize) {
        log::info!("![{}] {}", occurrence, location.full_path().display());
    }
}

/// Walks a directory tree and folds every regular file into a catalogue.
#[derive(Debug, Default)]
pub struct Scanner {
    hasher: Hasher,
}

impl Scanner {
    /// Create a new scanner.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hasher: Hasher::new(),
        }
    }

    /// Scan `root`, recording every regular file into `catalogue`.
    ///
    /// Files are visited in the walker's deterministic order. A file whose
    /// fingerprint is absent from the catalogue counts as unique; one whose
    /// fingerprint is present counts as a duplicate and is reported to
    /// `observer` before being recorded, so the catalogue ends up holding
    /// every copy.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScanError`] encountered; the walk stops at that
    /// point and later files are never visited. Locations recorded before
    /// the failure remain in `catalogue`.
    pub fn scan(
        &self,
        root: &Path,
        catalogue: &mut Catalogue,
        observer: &mut dyn ScanObserver,
    ) -> Result<ScanStats, ScanError> {
        let mut stats = ScanStats::default();
        log::debug!("scanning {}", root.display());

        for item in Walker::new(root).regular_files() {
            let (path, size) = item?;
            let fingerprint = self.hasher.fingerprint_file(&path)?;
            let location = FileLocation::from_path(&path, size);

            let occurrence = catalogue.occurrences(&fingerprint) + 1;
            if occurrence == 1 {
                stats.unique += 1;
            } else {
                stats.duplicates += 1;
                observer.on_duplicate(&fingerprint, &location, occurrence);
            }
            catalogue.record(&fingerprint, location);
        }

        log::debug!(
            "scan of {} done: {} unique, {} duplicates",
            root.display(),
            stats.unique,
            stats.duplicates
        );
        Ok(stats)
    }
}
