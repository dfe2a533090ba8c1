//! The catalogue entity: fingerprints mapped to every known location.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scanner::Fingerprint;

/// Current version of the catalogue file format.
pub const CATALOGUE_VERSION: u32 = 1;

/// One on-disk occurrence of a piece of content.
///
/// Immutable once created; owned by the catalogue entry it is appended to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLocation {
    /// Base filename.
    pub name: String,
    /// Containing directory path.
    pub directory: String,
    /// Byte length of the file.
    pub size: u64,
}

impl FileLocation {
    /// Split `path` into base name and containing directory.
    #[must_use]
    pub fn from_path(path: &Path, size: u64) -> Self {
        Self {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            directory: path
                .parent()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
            size,
        }
    }

    /// Rejoin directory and name into a full path, as used in the report.
    #[must_use]
    pub fn full_path(&self) -> PathBuf {
        Path::new(&self.directory).join(&self.name)
    }
}

/// Mapping from content fingerprint to every recorded location of that
/// content.
///
/// Keys are fingerprint hex strings; a key exists iff at least one location
/// has been recorded for it, so per-key lists are never empty. List order
/// is discovery order and appends are the only mutation within a session.
/// A fingerprint is duplicated iff its list holds more than one location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogue {
    /// Format version, checked on load.
    pub version: u32,
    /// When this catalogue was last persisted. Metadata only; not part of
    /// structural equality.
    pub saved_at: DateTime<Utc>,
    entries: BTreeMap<String, Vec<FileLocation>>,
}

impl Catalogue {
    /// Create an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: CATALOGUE_VERSION,
            saved_at: Utc::now(),
            entries: BTreeMap::new(),
        }
    }

    /// All entries, keyed by fingerprint hex.
    #[must_use]
    pub fn entries(&self) -> &BTreeMap<String, Vec<FileLocation>> {
        &self.entries
    }

    /// Locations recorded for `fingerprint`, in discovery order, or `None`
    /// if the content has never been seen.
    #[must_use]
    pub fn lookup(&self, fingerprint: &Fingerprint) -> Option<&[FileLocation]> {
        self.entries
            .get(&fingerprint.to_hex())
            .map(Vec::as_slice)
    }

    /// Number of locations recorded for `fingerprint` (0 when absent).
    #[must_use]
    pub fn occurrences(&self, fingerprint: &Fingerprint) -> usize {
        self.lookup(fingerprint).map_or(0, |locations| locations.len())
    }

    /// Append `location` under `fingerprint`, creating the entry if absent.
    ///
    /// Emits no new-vs-duplicate classification; callers that need it check
    /// [`Self::lookup`] (or [`Self::occurrences`]) before recording.
    pub fn record(&mut self, fingerprint: &Fingerprint, location: FileLocation) {
        self.entries
            .entry(fingerprint.to_hex())
            .or_default()
            .push(location);
    }

    /// Number of distinct fingerprints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalogue holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries with more than one recorded location.
    pub fn duplicate_groups(&self) -> impl Iterator<Item = (&str, &[FileLocation])> {
        self.entries
            .iter()
            .filter(|(_, locations)| locations.len() > 1)
            .map(|(hex, locations)| (hex.as_str(), locations.as_slice()))
    }

    /// Total number of redundant copies: for every fingerprint, each
    /// location beyond the first counts as one duplicate file.
    #[must_use]
    pub fn duplicate_file_count(&self) -> u64 {
        self.entries
            .values()
            .map(|locations| (locations.len() as u64).saturating_sub(1))
            .sum()
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(byte: u8) -> Fingerprint {
        Fingerprint::from_bytes([byte; 32])
    }

    fn loc(name: &str, size: u64) -> FileLocation {
        FileLocation {
            name: name.to_string(),
            directory: "/data".to_string(),
            size,
        }
    }

    #[test]
    fn test_lookup_returns_locations_in_record_order() {
        let mut catalogue = Catalogue::new();
        assert!(catalogue.lookup(&fp(1)).is_none());

        catalogue.record(&fp(1), loc("first", 10));
        catalogue.record(&fp(1), loc("second", 10));
        catalogue.record(&fp(2), loc("other", 20));

        let locations = catalogue.lookup(&fp(1)).unwrap();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].name, "first");
        assert_eq!(locations[1].name, "second");
        assert_eq!(catalogue.occurrences(&fp(2)), 1);
        assert_eq!(catalogue.occurrences(&fp(3)), 0);
    }

    #[test]
    fn test_duplicate_groups_and_counts() {
        let mut catalogue = Catalogue::new();
        catalogue.record(&fp(1), loc("a", 1));
        catalogue.record(&fp(1), loc("b", 1));
        catalogue.record(&fp(1), loc("c", 1));
        catalogue.record(&fp(2), loc("lone", 2));

        let groups: Vec<_> = catalogue.duplicate_groups().collect();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].1.len(), 3);
        assert_eq!(catalogue.duplicate_file_count(), 2);
        assert_eq!(catalogue.len(), 2);
    }

    #[test]
    fn test_file_location_from_path() {
        let location = FileLocation::from_path(Path::new("/home/user/photo.jpg"), 42);
        assert_eq!(location.name, "photo.jpg");
        assert_eq!(location.directory, "/home/user");
        assert_eq!(location.size, 42);
        assert_eq!(location.full_path(), PathBuf::from("/home/user/photo.jpg"));
    }

    #[test]
    fn test_empty_catalogue() {
        let catalogue = Catalogue::new();
        assert!(catalogue.is_empty());
        assert_eq!(catalogue.len(), 0);
        assert_eq!(catalogue.duplicate_file_count(), 0);
        assert_eq!(catalogue.duplicate_groups().count(), 0);
    }
}
