//! Property tests for manifest reconciliation.

use std::collections::BTreeSet;
use std::fs;

use proptest::prelude::*;

use vanillafy::infrastructure::LocalFs;
use vanillafy::{DirectorySnapshot, Manifest, ManifestReconciler, ReconciliationResult};

/// Lower-case only, so case-insensitive filesystems cannot merge two names.
fn entry_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_]{1,10}(\\.[a-z]{1,3})?")
        .unwrap()
        .prop_filter("Windows device name", |name| {
            let stem = name.split('.').next().unwrap_or_default();
            !matches!(stem, "con" | "prn" | "aux" | "nul")
                && !(stem.len() == 4
                    && (stem.starts_with("com") || stem.starts_with("lpt"))
                    && stem.ends_with(|c: char| c.is_ascii_digit()))
        })
}

fn name_set(max: usize) -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set(entry_name(), 0..=max)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: missing = M - D, extra = D - M, and the two never overlap.
    #[test]
    fn property_missing_and_extra_are_set_differences(
        manifest in name_set(12),
        present in name_set(12),
    ) {
        let result = ReconciliationResult::between(
            &Manifest::new(manifest.iter().cloned()),
            &DirectorySnapshot::new(present.iter().cloned()),
        );

        let expected_missing: BTreeSet<String> = manifest.difference(&present).cloned().collect();
        let expected_extra: BTreeSet<String> = present.difference(&manifest).cloned().collect();

        prop_assert_eq!(&result.missing, &expected_missing);
        prop_assert_eq!(&result.extra, &expected_extra);
        prop_assert!(result.missing.is_disjoint(&result.extra));
        prop_assert!(result.missing.is_subset(&manifest));
        prop_assert!(result.extra.is_disjoint(&manifest));
    }

    /// PROPERTY: the result is conforming exactly when the sets are equal.
    #[test]
    fn property_conforming_iff_equal(
        manifest in name_set(8),
        present in name_set(8),
    ) {
        let result = ReconciliationResult::between(
            &Manifest::new(manifest.iter().cloned()),
            &DirectorySnapshot::new(present.iter().cloned()),
        );
        prop_assert_eq!(result.is_conforming(), manifest == present);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: reconciling an unchanged directory twice gives the same answer.
    #[test]
    fn property_reconcile_is_stable_on_disk(
        manifest in name_set(6),
        files in name_set(6),
        dirs in name_set(3),
    ) {
        let dir = tempfile::tempdir().unwrap();
        for name in &files {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        for name in dirs.difference(&files) {
            fs::create_dir_all(dir.path().join(name)).unwrap();
        }

        let manifest = Manifest::new(manifest.iter().cloned());
        let fs = LocalFs::new();
        let reconciler = ManifestReconciler::new(&fs);

        let first = reconciler.reconcile(dir.path(), &manifest).unwrap();
        let second = reconciler.reconcile(dir.path(), &manifest).unwrap();
        prop_assert_eq!(first, second);
    }
}
