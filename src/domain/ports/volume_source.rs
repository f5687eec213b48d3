//! Volume Source Port
//!
//! Enumerates the storage volumes a full scan walks over.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::VolumeId;

/// Source of addressable volumes.
pub trait VolumeSource {
    /// All currently addressable volumes (order is not significant).
    fn list_volumes(&self) -> Vec<VolumeId>;

    /// Root directory of a volume.
    fn root(&self, id: &VolumeId) -> PathBuf;

    /// Presence check for a volume root or any other path.
    fn exists(&self, path: &Path) -> bool;
}

impl<V: VolumeSource + ?Sized> VolumeSource for &V {
    fn list_volumes(&self) -> Vec<VolumeId> {
        (**self).list_volumes()
    }

    fn root(&self, id: &VolumeId) -> PathBuf {
        (**self).root(id)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
