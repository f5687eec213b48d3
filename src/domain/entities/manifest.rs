//! Manifest entity
//!
//! The whitelist of top-level entry names a vanilla installation contains.

use std::collections::BTreeSet;

/// Immutable set of expected top-level entry names.
///
/// Names are compared case-sensitively, exactly as the file system lists
/// them. Directories (e.g. `Data`) are matched by name only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeSet<String>,
}

impl Manifest {
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
