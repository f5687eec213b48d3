//! Discovery strategies

use std::fmt;
use std::path::PathBuf;

use super::VolumeId;

/// How the installation directory should be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryStrategy {
    /// Scan every addressable volume, ascending by identifier.
    FullScan,
    /// Scan a single volume.
    SingleVolume(VolumeId),
    /// Validate a directory given directly, without descending into it.
    DirectPath(PathBuf),
}

impl fmt::Display for DiscoveryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryStrategy::FullScan => write!(f, "scan all volumes"),
            DiscoveryStrategy::SingleVolume(id) => write!(f, "scan volume {}", id),
            DiscoveryStrategy::DirectPath(path) => write!(f, "check {}", path.display()),
        }
    }
}
