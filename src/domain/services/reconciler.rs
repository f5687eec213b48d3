//! Manifest Reconciler
//!
//! Lists a directory once and classifies its entries against a manifest.

use std::path::Path;

use tracing::debug;

use crate::domain::entities::{DirectorySnapshot, Manifest, ReconciliationResult};
use crate::domain::ports::{FileSystem, FsResult};

/// Compares a directory's top-level entries with a [`Manifest`].
///
/// Subdirectories are matched by name only; their contents are never
/// compared.
pub struct ManifestReconciler<'a, FS: ?Sized> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem + ?Sized> ManifestReconciler<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// Take a snapshot of the direct children of `dir` (one listing).
    pub fn snapshot(&self, dir: &Path) -> FsResult<DirectorySnapshot> {
        let entries = self.fs.list_dir(dir)?;
        Ok(DirectorySnapshot::new(entries.into_iter().map(|e| e.name)))
    }

    pub fn reconcile(&self, dir: &Path, manifest: &Manifest) -> FsResult<ReconciliationResult> {
        let snapshot = self.snapshot(dir)?;
        let result = ReconciliationResult::between(manifest, &snapshot);
        debug!(
            dir = %dir.display(),
            present = snapshot.len(),
            missing = result.missing.len(),
            extra = result.extra.len(),
            "reconciled"
        );
        Ok(result)
    }
}
