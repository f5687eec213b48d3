//! Remover
//!
//! Deletes named entries from a directory. Each entry succeeds or fails on
//! its own; one failure never stops the rest of the batch.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::ports::FileSystem;

/// What happened to one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum RemovalOutcome {
    Deleted,
    Failed(String),
}

/// Per-entry outcome of a removal batch, keyed by entry name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RemovalReport {
    outcomes: BTreeMap<String, RemovalOutcome>,
}

impl RemovalReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>, outcome: RemovalOutcome) {
        self.outcomes.insert(name.into(), outcome);
    }

    pub fn get(&self, name: &str) -> Option<&RemovalOutcome> {
        self.outcomes.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RemovalOutcome)> {
        self.outcomes
            .iter()
            .map(|(name, outcome)| (name.as_str(), outcome))
    }

    /// Names that were deleted
    pub fn deleted(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, outcome)| matches!(outcome, RemovalOutcome::Deleted))
            .map(|(name, _)| name)
    }

    /// Names that failed, with the reason
    pub fn failed(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter_map(|(name, outcome)| match outcome {
            RemovalOutcome::Failed(reason) => Some((name, reason.as_str())),
            RemovalOutcome::Deleted => None,
        })
    }

    pub fn deleted_count(&self) -> usize {
        self.deleted().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Removes entries (files or whole subtrees) from a directory.
pub struct Remover<'a, FS: ?Sized> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem + ?Sized> Remover<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// Remove each named entry of `dir`.
    ///
    /// Names are matched against the directory's listing, so an entry whose
    /// on-disk name is not valid UTF-8 is removed through its raw name.
    pub fn remove<I, S>(&self, dir: &Path, names: I) -> RemovalReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw_names = self.raw_names(dir);
        let mut report = RemovalReport::new();

        for name in names {
            let name = name.as_ref();
            let outcome = match self.remove_one(dir, name, raw_names.get(name)) {
                Ok(()) => {
                    info!(entry = name, "deleted");
                    RemovalOutcome::Deleted
                }
                Err(reason) => {
                    warn!(entry = name, %reason, "failed to delete");
                    RemovalOutcome::Failed(reason)
                }
            };
            report.record(name, outcome);
        }

        report
    }

    /// Raw on-disk names grouped by their display name. Several raw names
    /// can share one lossy display name.
    fn raw_names(&self, dir: &Path) -> BTreeMap<String, Vec<OsString>> {
        let mut grouped: BTreeMap<String, Vec<OsString>> = BTreeMap::new();
        match self.fs.list_dir(dir) {
            Ok(entries) => {
                for entry in entries {
                    let raw = entry.raw_name().to_os_string();
                    grouped.entry(entry.name).or_default().push(raw);
                }
            }
            Err(err) => {
                debug!(dir = %dir.display(), error = %err, "listing before removal failed");
            }
        }
        grouped
    }

    fn remove_one(
        &self,
        dir: &Path,
        name: &str,
        raw_names: Option<&Vec<OsString>>,
    ) -> Result<(), String> {
        // Only direct children of the target may ever be touched.
        let mut components = Path::new(name).components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            return Err(format!(
                "'{}' is not a direct child of {}",
                name,
                dir.display()
            ));
        }

        let paths: Vec<PathBuf> = match raw_names {
            Some(raws) => raws.iter().map(|raw| dir.join(raw)).collect(),
            None => vec![dir.join(name)],
        };

        let mut first_error = None;
        for path in &paths {
            let result = if self.fs.is_dir(path) {
                self.fs.remove_dir_all(path)
            } else {
                self.fs.remove_file(path)
            };
            if let Err(err) = result {
                first_error.get_or_insert(err.to_string());
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
