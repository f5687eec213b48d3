//! FileSystem port - abstraction over directory listing and removal
//!
//! Discovery, reconciliation and removal only ever see this trait, so they
//! can run against the local disk or an in-memory double in tests.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// Path not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Classify an I/O error, keeping the path it happened on.
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::from_io(err, Path::new(""))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Kind of a directory entry, as listed (symlinks are not followed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

/// One direct child of a listed directory.
///
/// `name` is the lossy UTF-8 form used for display and comparison. Paths
/// are always built from the raw name, so entries whose names are not
/// valid UTF-8 stay reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub kind: EntryKind,
    raw: OsString,
}

impl DirEntryInfo {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        let name = name.into();
        Self {
            raw: OsString::from(&name),
            name,
            kind,
        }
    }

    /// Entry with its name exactly as the OS returned it.
    pub fn from_os(raw: OsString, kind: EntryKind) -> Self {
        Self {
            name: raw.to_string_lossy().into_owned(),
            kind,
            raw,
        }
    }

    pub fn raw_name(&self) -> &OsStr {
        &self.raw
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test doubles that inject failures or count visits
pub trait FileSystem {
    /// Resolve a possibly relative path against the working directory,
    /// without touching the disk or following symlinks
    fn absolute(&self, path: &Path) -> FsResult<PathBuf>;

    /// List the direct children of a directory, in native enumeration order
    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntryInfo>>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a real directory (symlinks are not followed)
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a single file or symlink
    fn remove_file(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory and its entire subtree
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn absolute(&self, path: &Path) -> FsResult<PathBuf> {
        (**self).absolute(path)
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntryInfo>> {
        (**self).list_dir(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        (**self).remove_file(path)
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).remove_dir_all(path)
    }
}
