//! Target directory value object

use std::fmt;
use std::path::{Path, PathBuf};

/// The resolved installation directory a cleanup run operates on.
///
/// Only produced by a successful discovery; never persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDirectory(PathBuf);

impl TargetDirectory {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn into_path(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for TargetDirectory {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for TargetDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
