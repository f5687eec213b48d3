//! Directory snapshot entity

use std::collections::BTreeSet;

/// Top-level entry names present in a directory at listing time.
///
/// A snapshot is never refreshed; a later pass takes a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectorySnapshot {
    entries: BTreeSet<String>,
}

impl DirectorySnapshot {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains(name)
    }

    pub fn entries(&self) -> &BTreeSet<String> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
