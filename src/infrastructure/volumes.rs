//! Volume enumeration for the running platform

use std::path::{Path, PathBuf};

use crate::domain::ports::VolumeSource;
use crate::domain::value_objects::VolumeId;

/// Volumes of the local machine.
///
/// On Windows every drive letter `A:`..`Z:` whose root exists; elsewhere the
/// filesystem root `/`, with any absolute mount path accepted as a volume id.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemVolumes;

impl SystemVolumes {
    pub fn new() -> Self {
        Self
    }
}

fn drive_root(letter: &str) -> PathBuf {
    PathBuf::from(format!("{letter}:\\"))
}

impl VolumeSource for SystemVolumes {
    #[cfg(windows)]
    fn list_volumes(&self) -> Vec<VolumeId> {
        ('A'..='Z')
            .map(|letter| VolumeId::parse(&letter.to_string()))
            .filter(|id| self.exists(&self.root(id)))
            .collect()
    }

    #[cfg(not(windows))]
    fn list_volumes(&self) -> Vec<VolumeId> {
        vec![VolumeId::parse("/")]
    }

    fn root(&self, id: &VolumeId) -> PathBuf {
        if id.is_drive_letter() {
            drive_root(id.as_str())
        } else {
            PathBuf::from(id.as_str())
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
