//! Cleanup options and profile

use crate::domain::entities::Manifest;
use crate::domain::policies::ProtectedZoneSet;

/// What a vanilla installation looks like and how to advise the user.
#[derive(Debug, Clone)]
pub struct CleanupProfile {
    /// File name that marks the installation root
    pub sentinel: String,
    /// Whitelisted top-level entries
    pub manifest: Manifest,
    /// Locations that need an explicit confirmation
    pub zones: ProtectedZoneSet,
    /// Suggested install locations shown with the zone guidance
    pub safe_locations: Vec<String>,
    /// Advice printed when manifest entries are missing
    pub missing_hint: String,
}

/// Options for a cleanup run
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    /// Report what would be deleted without deleting
    pub dry_run: bool,
    /// Run the second re-list/confirm/remove round
    pub enforce: bool,
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            enforce: true,
        }
    }
}

impl CleanupOptions {
    /// Create new cleanup options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Enable or disable the enforcement pass
    pub fn with_enforcement(mut self, enforce: bool) -> Self {
        self.enforce = enforce;
        self
    }
}
