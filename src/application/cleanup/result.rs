//! Cleanup result types

use std::fmt;
use std::path::PathBuf;

use crate::domain::entities::ReconciliationResult;
use crate::domain::policies::ZoneVerdict;
use crate::domain::services::{DiscoveryError, RemovalReport};
use crate::domain::value_objects::TargetDirectory;

/// Stages of a cleanup run, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupStage {
    Start,
    Located,
    ZoneChecked,
    Reconciled,
    ConfirmedOrAborted,
    Cleaned,
    Done,
}

impl fmt::Display for CleanupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CleanupStage::Start => "start",
            CleanupStage::Located => "located",
            CleanupStage::ZoneChecked => "zone checked",
            CleanupStage::Reconciled => "reconciled",
            CleanupStage::ConfirmedOrAborted => "confirmed",
            CleanupStage::Cleaned => "cleaned",
            CleanupStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Why a run stopped before reconciling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// No installation was found
    Discovery(DiscoveryError),
    /// User declined to clean inside a protected zone
    ProtectedZoneDeclined { zone: PathBuf },
    /// The located directory could not be listed
    Unreadable { path: PathBuf, reason: String },
}

impl AbortReason {
    /// Whether the user chose to stop (as opposed to a failure)
    pub fn is_user_choice(&self) -> bool {
        matches!(self, AbortReason::ProtectedZoneDeclined { .. })
    }
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::Discovery(err) => write!(f, "{}", err),
            AbortReason::ProtectedZoneDeclined { zone } => write!(
                f,
                "cleanup declined inside protected zone {}",
                zone.display()
            ),
            AbortReason::Unreadable { path, reason } => {
                write!(f, "cannot list {}: {}", path.display(), reason)
            }
        }
    }
}

/// Result of one removal round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// Nothing outside the manifest was present
    NothingToRemove,
    /// User declined; entries left in place
    Declined { names: Vec<String> },
    /// Dry run; entries that would be removed
    Planned { names: Vec<String> },
    /// Removal attempted
    Removed(RemovalReport),
    /// Directory could not be re-listed
    Unreadable { reason: String },
}

impl PassOutcome {
    pub fn report(&self) -> Option<&RemovalReport> {
        match self {
            PassOutcome::Removed(report) => Some(report),
            _ => None,
        }
    }
}

/// What a report-only run found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub target: TargetDirectory,
    pub zone: ZoneVerdict,
    pub reconciliation: ReconciliationResult,
}

/// A run that reached `Done`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupSummary {
    pub verification: Verification,
    pub initial: PassOutcome,
    /// `None` when the enforcement pass was disabled
    pub enforcement: Option<PassOutcome>,
}

impl CleanupSummary {
    fn reports(&self) -> impl Iterator<Item = &RemovalReport> {
        std::iter::once(&self.initial)
            .chain(self.enforcement.as_ref())
            .filter_map(PassOutcome::report)
    }

    pub fn deleted_count(&self) -> usize {
        self.reports().map(RemovalReport::deleted_count).sum()
    }

    pub fn failed_count(&self) -> usize {
        self.reports().map(RemovalReport::failed_count).sum()
    }
}

/// Terminal state of a cleanup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// Stopped at `stage`
    Aborted {
        stage: CleanupStage,
        reason: AbortReason,
    },
    /// Reached `Done`, whether or not anything was deleted
    Completed(CleanupSummary),
}

impl CleanupOutcome {
    pub fn is_aborted(&self) -> bool {
        matches!(self, CleanupOutcome::Aborted { .. })
    }

    pub fn summary(&self) -> Option<&CleanupSummary> {
        match self {
            CleanupOutcome::Completed(summary) => Some(summary),
            CleanupOutcome::Aborted { .. } => None,
        }
    }
}
