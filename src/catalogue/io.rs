//! Loading and saving catalogue files.
//!
//! The persisted form is versioned JSON: the whole entry map with per-key
//! list order preserved. Saving truncates and rewrites the file; loading
//! reconstructs the mapping exactly, so save-then-load is structurally
//! lossless. There is no checksum or re-hashing on load; the file is
//! trusted as-is.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use super::data::{Catalogue, CATALOGUE_VERSION};

/// Errors raised while loading or saving a catalogue file.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The storage file could not be read or written.
    #[error("cannot access catalogue file {path}: {source}")]
    Io {
        /// Path of the storage file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The storage bytes do not deserialize into the entity model.
    #[error("catalogue file {path} is malformed: {source}")]
    Format {
        /// Path of the storage file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The file parsed but carries a version this build does not handle.
    #[error("catalogue file {path} has unsupported version {found} (current is {CATALOGUE_VERSION})")]
    UnsupportedVersion {
        /// Path of the storage file.
        path: PathBuf,
        /// Version found in the file.
        found: u32,
    },
}

impl Catalogue {
    /// Persist the catalogue to `path`, overwriting any previous content.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Io`] if the file cannot be written.
    pub fn save(&mut self, path: &Path) -> Result<(), CatalogueError> {
        self.saved_at = Utc::now();
        let json = serde_json::to_string_pretty(self).map_err(|source| {
            CatalogueError::Format {
                path: path.to_path_buf(),
                source,
            }
        })?;
        fs::write(path, json).map_err(|source| CatalogueError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("catalogue saved: {}", path.display());
        Ok(())
    }

    /// Load a catalogue from `path`.
    ///
    /// # Errors
    ///
    /// [`CatalogueError::Io`] if the file cannot be read,
    /// [`CatalogueError::Format`] if its bytes are truncated or malformed,
    /// [`CatalogueError::UnsupportedVersion`] on a version mismatch. All
    /// are fatal for the load attempt; there is no partial recovery.
    pub fn load(path: &Path) -> Result<Self, CatalogueError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogueError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalogue: Self =
            serde_json::from_str(&content).map_err(|source| CatalogueError::Format {
                path: path.to_path_buf(),
                source,
            })?;
        if catalogue.version != CATALOGUE_VERSION {
            return Err(CatalogueError::UnsupportedVersion {
                path: path.to_path_buf(),
                found: catalogue.version,
            });
        }
        log::info!(
            "catalogue loaded: {} ({} fingerprints)",
            path.display(),
            catalogue.len()
        );
        Ok(catalogue)
    }

    /// Load the catalogue at `path`, seeding an empty one first if the
    /// file does not exist yet.
    ///
    /// # Errors
    ///
    /// Propagates any [`CatalogueError`] from the seed write or the load.
    pub fn load_or_create(path: &Path) -> Result<Self, CatalogueError> {
        if !path.exists() {
            log::info!("no catalogue at {}, starting empty", path.display());
            Self::new().save(path)?;
        }
        Self::load(path)
    }
}
