//! Volume identifiers
//!
//! A volume is an addressable storage root that can be scanned for an
//! installation. On Windows it is a drive letter (`C`), elsewhere it is the
//! absolute path of a mount point (`/`, `/mnt/games`).

use std::fmt;

/// Identifier of a storage volume, ordered so scans visit volumes ascending.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VolumeId(String);

impl VolumeId {
    /// Parse a user-supplied volume identifier.
    ///
    /// Drive-letter forms (`c`, `C:`, `C:\`) normalize to the upper-case
    /// letter. Anything else is kept verbatim (trimmed).
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let letter = trimmed.trim_end_matches(['\\', '/']).trim_end_matches(':');

        let mut chars = letter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Self(c.to_ascii_uppercase().to_string()),
            _ => Self(trimmed.to_string()),
        }
    }

    /// Whether this identifier is a single drive letter.
    pub fn is_drive_letter(&self) -> bool {
        self.0.len() == 1 && self.0.chars().all(|c| c.is_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VolumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_drive_letter() {
            write!(f, "{}:", self.0)
        } else {
            f.write_str(&self.0)
        }
    }
}
