//! In-memory doubles shared by the service and use case tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use crate::domain::ports::{
    DirEntryInfo, EntryKind, FileSystem, FsError, FsResult, VolumeSource,
};
use crate::domain::value_objects::VolumeId;

/// Tree of files and directories held in memory.
///
/// Listing order is the sorted path order, which keeps traversal tests
/// deterministic. Every `list_dir` call is recorded. Relative paths resolve
/// against `cwd`, which defaults to `/`.
#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: RefCell<BTreeMap<PathBuf, EntryKind>>,
    locked: HashSet<PathBuf>,
    listed: RefCell<Vec<PathBuf>>,
    cwd: Option<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cwd(mut self, path: &str) -> Self {
        self.cwd = Some(PathBuf::from(path));
        self
    }

    pub fn dir(self, path: &str) -> Self {
        self.insert(Path::new(path), EntryKind::Directory);
        self
    }

    pub fn file(self, path: &str) -> Self {
        self.insert(Path::new(path), EntryKind::File);
        self
    }

    /// Make removal of this path fail with permission denied.
    pub fn locked(mut self, path: &str) -> Self {
        self.locked.insert(PathBuf::from(path));
        self
    }

    pub fn listed(&self) -> Vec<PathBuf> {
        self.listed.borrow().clone()
    }

    pub fn children(&self, path: &str) -> BTreeSet<String> {
        self.list_dir(Path::new(path))
            .map(|entries| entries.into_iter().map(|e| e.name).collect())
            .unwrap_or_default()
    }

    fn insert(&self, path: &Path, kind: EntryKind) {
        let mut nodes = self.nodes.borrow_mut();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            nodes
                .entry(ancestor.to_path_buf())
                .or_insert(EntryKind::Directory);
        }
        nodes.insert(path.to_path_buf(), kind);
    }
}

impl FileSystem for MemoryFs {
    fn absolute(&self, path: &Path) -> FsResult<PathBuf> {
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        let cwd = self.cwd.clone().unwrap_or_else(|| PathBuf::from("/"));
        Ok(cwd.join(path))
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntryInfo>> {
        self.listed.borrow_mut().push(path.to_path_buf());
        let nodes = self.nodes.borrow();
        match nodes.get(path) {
            Some(EntryKind::Directory) => {}
            Some(_) => {
                return Err(FsError::Other(format!(
                    "not a directory: {}",
                    path.display()
                )));
            }
            None => return Err(FsError::NotFound(path.to_path_buf())),
        }

        Ok(nodes
            .iter()
            .filter(|(p, _)| p.parent() == Some(path))
            .filter_map(|(p, kind)| {
                Some(DirEntryInfo::from_os(p.file_name()?.to_os_string(), *kind))
            })
            .collect())
    }

    fn exists(&self, path: &Path) -> bool {
        self.nodes.borrow().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.nodes.borrow().get(path) == Some(&EntryKind::Directory)
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        if self.locked.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        match self.nodes.borrow_mut().remove(path) {
            Some(_) => Ok(()),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        if self.locked.iter().any(|l| l.starts_with(path)) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        let mut nodes = self.nodes.borrow_mut();
        if !nodes.contains_key(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        nodes.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}

/// Volumes mapped to fixed roots.
#[derive(Debug, Default)]
pub struct FakeVolumes {
    roots: Vec<(VolumeId, PathBuf)>,
    present: HashSet<PathBuf>,
}

impl FakeVolumes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn volume(mut self, id: &str, root: &str) -> Self {
        self.roots.push((VolumeId::parse(id), PathBuf::from(root)));
        self.present.insert(PathBuf::from(root));
        self
    }
}

impl VolumeSource for FakeVolumes {
    fn list_volumes(&self) -> Vec<VolumeId> {
        self.roots.iter().map(|(id, _)| id.clone()).collect()
    }

    fn root(&self, id: &VolumeId) -> PathBuf {
        self.roots
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, root)| root.clone())
            .unwrap_or_else(|| PathBuf::from(format!("/missing/{}", id.as_str())))
    }

    fn exists(&self, path: &Path) -> bool {
        self.present.contains(path)
    }
}
