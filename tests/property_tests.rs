use filecat::catalogue::{Catalogue, FileLocation};
use filecat::scanner::Fingerprint;
use proptest::prelude::*;
use tempfile::TempDir;

fn arb_location() -> impl Strategy<Value = FileLocation> {
    ("[a-z]{1,12}", "/[a-z]{1,12}", 0u64..1_000_000).prop_map(|(name, directory, size)| {
        FileLocation {
            name,
            directory,
            size,
        }
    })
}

fn arb_entries() -> impl Strategy<Value = Vec<(u8, Vec<FileLocation>)>> {
    prop::collection::vec((any::<u8>(), prop::collection::vec(arb_location(), 1..5)), 0..16)
}

fn build_catalogue(entries: &[(u8, Vec<FileLocation>)]) -> Catalogue {
    let mut catalogue = Catalogue::new();
    for (seed, locations) in entries {
        let fp = Fingerprint::from_bytes([*seed; 32]);
        for location in locations {
            catalogue.record(&fp, location.clone());
        }
    }
    catalogue
}

proptest! {
    #[test]
    fn save_load_round_trip(entries in arb_entries()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalogue.json");

        let mut original = build_catalogue(&entries);
        original.save(&path).unwrap();
        let loaded = Catalogue::load(&path).unwrap();

        prop_assert_eq!(loaded.entries(), original.entries());
    }

    #[test]
    fn lookup_returns_recorded_locations_in_order(
        locations in prop::collection::vec(arb_location(), 1..10)
    ) {
        let mut catalogue = Catalogue::new();
        let fp = Fingerprint::from_bytes([42; 32]);
        for location in &locations {
            catalogue.record(&fp, location.clone());
        }

        prop_assert_eq!(catalogue.lookup(&fp).unwrap(), locations.as_slice());
        prop_assert_eq!(catalogue.occurrences(&fp), locations.len());
    }

    #[test]
    fn duplicate_count_is_locations_minus_one(entries in arb_entries()) {
        let catalogue = build_catalogue(&entries);

        // Keys may collide across generated seeds, so derive the expected
        // count from the catalogue's own entries.
        let expected: u64 = catalogue
            .entries()
            .values()
            .map(|locs| locs.len() as u64 - 1)
            .sum();
        prop_assert_eq!(catalogue.duplicate_file_count(), expected);

        for (_, locations) in catalogue.duplicate_groups() {
            prop_assert!(locations.len() > 1);
        }
    }

    #[test]
    fn hex_round_trip(bytes in any::<[u8; 32]>()) {
        let fp = Fingerprint::from_bytes(bytes);
        prop_assert_eq!(Fingerprint::from_hex(&fp.to_hex()), Some(fp));
    }
}
