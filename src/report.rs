//! CSV export of duplicated catalogue entries.
//!
//! One row is written for every location of every fingerprint that has
//! more than one recorded location; fingerprints with a single location
//! produce no rows.
//!
//! # Columns
//!
//! - `hash`: content fingerprint (hexadecimal)
//! - `filepath`: full path (directory joined with name)
//! - `bytes`: file size in bytes
//! - `copies`: total number of recorded locations for that fingerprint
//!
//! The report destination is append-only: the header is written once when
//! the file is first created, and later exports add rows without repeating
//! it.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::catalogue::Catalogue;

/// Errors that can occur while writing the duplicate report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report file could not be opened or flushed.
    #[error("cannot write report {path}: {source}")]
    Io {
        /// Path of the report file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Error during CSV serialization.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A single row in the duplicate report.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    hash: &'a str,
    filepath: String,
    bytes: u64,
    copies: usize,
}

/// Duplicate report writer over a catalogue.
pub struct DuplicateReport<'a> {
    catalogue: &'a Catalogue,
}

impl<'a> DuplicateReport<'a> {
    /// Create a report over `catalogue`.
    #[must_use]
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self { catalogue }
    }

    /// Append the report to `path`, creating it (with a header row) if it
    /// does not exist yet. Returns the number of data rows written.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the file cannot be opened or a row fails
    /// to serialize.
    pub fn append_to(&self, path: &Path) -> Result<usize, ReportError> {
        let is_new = !path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ReportError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if is_new {
            writer.write_record(["hash", "filepath", "bytes", "copies"])?;
        }

        let mut rows = 0;
        for (hash, locations) in self.catalogue.duplicate_groups() {
            for location in locations {
                writer.serialize(ReportRow {
                    hash,
                    filepath: location.full_path().to_string_lossy().into_owned(),
                    bytes: location.size,
                    copies: locations.len(),
                })?;
                rows += 1;
            }
        }

        writer.flush().map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(rows)
    }
}
