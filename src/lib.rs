//! vanillafy - return a modded game installation to its vanilla state
//!
//! Locates an installation by its sentinel executable, compares its top-level
//! entries with a whitelist manifest, and removes whatever does not belong,
//! asking before every destructive step and warning when the installation
//! sits inside a protected system folder.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::cleanup::{
    AbortReason, CleanupOptions, CleanupOutcome, CleanupProfile, CleanupStage, CleanupSummary,
    CleanupUseCase, PassOutcome, Verification,
};
pub use config::Config;
pub use domain::entities::{DirectorySnapshot, Manifest, ReconciliationResult};
pub use domain::policies::{ProtectedZoneGuard, ProtectedZoneSet, ZoneVerdict};
pub use domain::services::{
    DiscoveryError, ManifestReconciler, PathLocator, RemovalOutcome, RemovalReport, Remover,
};
pub use domain::value_objects::{CancelFlag, DiscoveryStrategy, TargetDirectory, VolumeId};
pub use error::{VanillafyError, VanillafyResult};
