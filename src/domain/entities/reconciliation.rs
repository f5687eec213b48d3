//! Reconciliation result
//!
//! Classification of a directory snapshot against a manifest.

use std::collections::BTreeSet;

use serde::Serialize;

use super::{DirectorySnapshot, Manifest};

/// Missing and extra entries of one snapshot.
///
/// Always derived fresh from a manifest and a snapshot, so `missing` and
/// `extra` can never overlap: one is a subset of the manifest, the other is
/// disjoint from it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ReconciliationResult {
    /// Manifest entries absent from the directory.
    pub missing: BTreeSet<String>,
    /// Directory entries absent from the manifest.
    pub extra: BTreeSet<String>,
}

impl ReconciliationResult {
    pub fn between(manifest: &Manifest, snapshot: &DirectorySnapshot) -> Self {
        let missing = manifest
            .entries()
            .difference(snapshot.entries())
            .cloned()
            .collect();
        let extra = snapshot
            .entries()
            .difference(manifest.entries())
            .cloned()
            .collect();

        Self { missing, extra }
    }

    /// True when the directory holds exactly the manifest.
    pub fn is_conforming(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}
