//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use crate::domain::ports::file_system::{
    DirEntryInfo, EntryKind, FileSystem, FsError, FsResult,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Local file system implementation
///
/// Lists and removes entries without following symlinks, so a link inside an
/// installation is removed as a link and never descended into.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

fn kind_of(file_type: fs::FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

impl FileSystem for LocalFs {
    fn absolute(&self, path: &Path) -> FsResult<PathBuf> {
        std::path::absolute(path).map_err(|e| FsError::from_io(e, path))
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntryInfo>> {
        let entries = fs::read_dir(path).map_err(|e| FsError::from_io(e, path))?;

        let mut listed = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FsError::from_io(e, path))?;
            let kind = entry.file_type().map(kind_of).unwrap_or(EntryKind::Other);
            listed.push(DirEntryInfo::from_os(entry.file_name(), kind));
        }
        Ok(listed)
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        fs::symlink_metadata(path)
            .map(|meta| meta.file_type().is_dir())
            .unwrap_or(false)
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            // Directory symlinks on Windows are removed like directories
            Err(err) if cfg!(windows) && is_symlink(path) => {
                fs::remove_dir(path).map_err(|_| FsError::from_io(err, path))
            }
            Err(err) => Err(FsError::from_io(err, path)),
        }
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::remove_dir_all(path).map_err(|e| FsError::from_io(e, path))
    }
}

fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false)
}
