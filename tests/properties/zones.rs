//! Property tests for the protected zone guard.

use std::path::PathBuf;

use proptest::prelude::*;

use vanillafy::{ProtectedZoneGuard, ProtectedZoneSet, ZoneVerdict};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _-]{1,10}").unwrap()
}

fn abs_path(max_depth: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=max_depth)
        .prop_map(|segments| format!("/{}", segments.join("/")))
}

fn zone_set() -> impl Strategy<Value = Vec<Option<String>>> {
    proptest::collection::vec(proptest::option::of(abs_path(3)), 0..=4)
}

fn build(zones: &[Option<String>]) -> ProtectedZoneSet {
    let zones = zones
        .iter()
        .map(|z| z.as_ref().map(PathBuf::from))
        .collect();
    ProtectedZoneSet::new(zones)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: protected iff some present zone is a case-insensitive prefix.
    #[test]
    fn property_protected_iff_prefix(
        zones in zone_set(),
        path in abs_path(5),
    ) {
        let verdict = ProtectedZoneGuard.classify(PathBuf::from(&path).as_path(), &build(&zones));

        let lowered = path.to_lowercase();
        let expected = zones
            .iter()
            .flatten()
            .any(|zone| lowered.starts_with(&zone.to_lowercase()));

        prop_assert_eq!(verdict.is_protected(), expected);
    }

    /// PROPERTY: changing the case of the path never changes the verdict.
    #[test]
    fn property_case_does_not_matter(
        zones in zone_set(),
        path in abs_path(5),
    ) {
        let set = build(&zones);
        let guard = ProtectedZoneGuard;

        let original = guard.classify(PathBuf::from(&path).as_path(), &set);
        let upper = guard.classify(PathBuf::from(path.to_uppercase()).as_path(), &set);
        let lower = guard.classify(PathBuf::from(path.to_lowercase()).as_path(), &set);

        prop_assert_eq!(&original, &upper);
        prop_assert_eq!(&original, &lower);
    }

    /// PROPERTY: a path under a present zone is protected by that zone or an
    /// earlier one.
    #[test]
    fn property_paths_under_a_zone_are_protected(
        zone in abs_path(3),
        rest in abs_path(3),
    ) {
        let set = build(&[None, Some(zone.clone())]);
        let path = format!("{}{}", zone, rest);

        let verdict = ProtectedZoneGuard.classify(PathBuf::from(&path).as_path(), &set);
        let expected = ZoneVerdict::Protected {
            zone: PathBuf::from(zone),
        };
        prop_assert_eq!(verdict, expected);
    }
}
