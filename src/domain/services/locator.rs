//! Path Locator
//!
//! Finds the installation directory: the first directory whose direct
//! children include the sentinel executable.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, trace};

use crate::domain::ports::{DirEntryInfo, FileSystem, VolumeSource};
use crate::domain::value_objects::{CancelFlag, DiscoveryStrategy, TargetDirectory, VolumeId};

/// Why discovery did not produce a target directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryError {
    /// No scanned directory contains the sentinel
    #[error("no installation containing {sentinel} was found")]
    NotFound { sentinel: String },

    /// Requested volume is not addressable
    #[error("volume {0} does not exist")]
    VolumeNotFound(VolumeId),

    /// Given directory does not exist or lacks the sentinel
    #[error("{path} is not a valid installation: {sentinel} not found")]
    InvalidPath { path: PathBuf, sentinel: String },

    /// Scan stopped by a cancel request
    #[error("scan cancelled")]
    Cancelled,
}

/// Discovers the target directory with one of the [`DiscoveryStrategy`]s.
///
/// Scans walk an explicit worklist instead of recursing, visit directories
/// depth-first in listing order, and stop at the first match.
pub struct PathLocator<'a, FS: ?Sized, V: ?Sized> {
    fs: &'a FS,
    volumes: &'a V,
    sentinel: &'a str,
    cancel: CancelFlag,
}

impl<'a, FS, V> PathLocator<'a, FS, V>
where
    FS: FileSystem + ?Sized,
    V: VolumeSource + ?Sized,
{
    pub fn new(fs: &'a FS, volumes: &'a V, sentinel: &'a str) -> Self {
        Self {
            fs,
            volumes,
            sentinel,
            cancel: CancelFlag::new(),
        }
    }

    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Run one strategy. Every returned target is absolute, so it can be
    /// classified against the protected zones.
    pub fn locate(
        &self,
        strategy: &DiscoveryStrategy,
    ) -> Result<TargetDirectory, DiscoveryError> {
        match strategy {
            DiscoveryStrategy::FullScan => self.scan_all(),
            DiscoveryStrategy::SingleVolume(id) => self.scan_volume(id),
            DiscoveryStrategy::DirectPath(path) => self.validate(path),
        }
    }

    fn scan_all(&self) -> Result<TargetDirectory, DiscoveryError> {
        let _scan = self.cancel.begin_scan();
        let mut volumes = self.volumes.list_volumes();
        volumes.sort();
        volumes.dedup();

        for id in &volumes {
            let root = self.volumes.root(id);
            if !self.volumes.exists(&root) {
                trace!(volume = %id, "volume vanished before scan");
                continue;
            }
            info!(volume = %id, root = %root.display(), "scanning volume");
            if let Some(found) = self.descend(&root)? {
                return Ok(found);
            }
        }

        Err(self.not_found())
    }

    fn scan_volume(&self, id: &VolumeId) -> Result<TargetDirectory, DiscoveryError> {
        let root = self.volumes.root(id);
        if !self.volumes.exists(&root) {
            return Err(DiscoveryError::VolumeNotFound(id.clone()));
        }
        // A mount path given as a volume may be relative.
        let root = self
            .fs
            .absolute(&root)
            .map_err(|_| DiscoveryError::VolumeNotFound(id.clone()))?;

        info!(volume = %id, root = %root.display(), "scanning volume");
        let _scan = self.cancel.begin_scan();
        self.descend(&root)?.ok_or_else(|| self.not_found())
    }

    fn validate(&self, path: &Path) -> Result<TargetDirectory, DiscoveryError> {
        let invalid = || DiscoveryError::InvalidPath {
            path: path.to_path_buf(),
            sentinel: self.sentinel.to_string(),
        };

        let resolved = self.fs.absolute(path).map_err(|_| invalid())?;
        if !self.fs.exists(&resolved) {
            return Err(invalid());
        }

        let entries = self.fs.list_dir(&resolved).map_err(|_| invalid())?;
        if self.holds_sentinel(&entries) {
            Ok(TargetDirectory::new(resolved))
        } else {
            Err(invalid())
        }
    }

    fn descend(&self, root: &Path) -> Result<Option<TargetDirectory>, DiscoveryError> {
        let mut pending = vec![root.to_path_buf()];
        let mut visited = 0usize;

        while let Some(dir) = pending.pop() {
            if self.cancel.is_cancelled() {
                debug!(visited, "scan cancelled");
                return Err(DiscoveryError::Cancelled);
            }
            visited += 1;

            let entries = match self.fs.list_dir(&dir) {
                Ok(entries) => entries,
                Err(err) => {
                    trace!(dir = %dir.display(), error = %err, "skipping unreadable directory");
                    continue;
                }
            };

            if self.holds_sentinel(&entries) {
                debug!(visited, found = %dir.display(), "sentinel found");
                return Ok(Some(TargetDirectory::new(dir)));
            }

            // Reversed so the first listed subdirectory is popped first.
            pending.extend(
                entries
                    .iter()
                    .rev()
                    .filter(|entry| entry.is_dir())
                    .map(|entry| dir.join(entry.raw_name())),
            );
        }

        debug!(visited, root = %root.display(), "volume exhausted");
        Ok(None)
    }

    fn holds_sentinel(&self, entries: &[DirEntryInfo]) -> bool {
        entries
            .iter()
            .any(|entry| entry.name == self.sentinel && !entry.is_dir())
    }

    fn not_found(&self) -> DiscoveryError {
        DiscoveryError::NotFound {
            sentinel: self.sentinel.to_string(),
        }
    }
}
