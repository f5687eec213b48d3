//! Cleanup Use Case
//!
//! Sequences a cleanup run: locate, zone check, reconcile, confirm, remove,
//! then a second enforcement pass. Every decision goes through the
//! `Confirmer`, every message through the `CleanupEventSink`; the run ends
//! in a returned outcome and never exits the process.

use tracing::info;

use crate::domain::entities::ReconciliationResult;
use crate::domain::policies::{ProtectedZoneGuard, ZoneVerdict};
use crate::domain::ports::{
    CleanupEvent, CleanupEventSink, CleanupPass, Confirmer, FileSystem, VolumeSource,
};
use crate::domain::services::{ManifestReconciler, PathLocator, RemovalOutcome, Remover};
use crate::domain::value_objects::{CancelFlag, DiscoveryStrategy, TargetDirectory};

use super::options::{CleanupOptions, CleanupProfile};
use super::result::{
    AbortReason, CleanupOutcome, CleanupStage, CleanupSummary, PassOutcome, Verification,
};

pub const PROCEED_PROMPT: &str =
    "Do you want to proceed with cleaning the directory despite the risks?";
pub const GUIDANCE_PROMPT: &str = "Do you want to see recommended safe and bad install locations?";
pub const DELETE_EXTRAS_PROMPT: &str = "Do you want to delete these extra files?";
pub const DELETE_NON_WHITELISTED_PROMPT: &str =
    "Do you want to delete these non-whitelisted items?";

/// Cleanup use case - returns an installation to its manifest
pub struct CleanupUseCase<FS, V, C, S>
where
    FS: FileSystem,
    V: VolumeSource,
    C: Confirmer,
    S: CleanupEventSink,
{
    fs: FS,
    volumes: V,
    confirmer: C,
    events: S,
    profile: CleanupProfile,
    options: CleanupOptions,
    cancel: CancelFlag,
}

impl<FS, V, C, S> CleanupUseCase<FS, V, C, S>
where
    FS: FileSystem,
    V: VolumeSource,
    C: Confirmer,
    S: CleanupEventSink,
{
    /// Create a new cleanup use case
    pub fn new(fs: FS, volumes: V, confirmer: C, events: S, profile: CleanupProfile) -> Self {
        Self {
            fs,
            volumes,
            confirmer,
            events,
            profile,
            options: CleanupOptions::default(),
            cancel: CancelFlag::new(),
        }
    }

    pub fn with_options(mut self, options: CleanupOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Locate, check and reconcile without asking or deleting anything.
    pub fn verify(&self, strategy: &DiscoveryStrategy) -> Result<Verification, AbortReason> {
        let target = self.locate(strategy)?;
        let zone = self.check_zone(&target);
        let reconciliation = self.reconcile(&target)?;

        Ok(Verification {
            target,
            zone,
            reconciliation,
        })
    }

    /// Run the full cleanup.
    pub fn run(&mut self, strategy: &DiscoveryStrategy) -> CleanupOutcome {
        let target = match self.locate(strategy) {
            Ok(target) => target,
            Err(reason) => return aborted(CleanupStage::Start, reason),
        };

        let zone = self.check_zone(&target);
        if let ZoneVerdict::Protected { zone: prefix } = &zone {
            if !self.confirmer.ask(PROCEED_PROMPT) {
                info!(zone = %prefix.display(), "declined cleanup in protected zone");
                return aborted(
                    CleanupStage::Located,
                    AbortReason::ProtectedZoneDeclined {
                        zone: prefix.clone(),
                    },
                );
            }
            if self.confirmer.ask(GUIDANCE_PROMPT) {
                self.events.on_event(CleanupEvent::ZoneGuidance {
                    zones: self
                        .profile
                        .zones
                        .present()
                        .map(|z| z.to_path_buf())
                        .collect(),
                    safe_locations: self.profile.safe_locations.clone(),
                });
            }
        }

        let reconciliation = match self.reconcile(&target) {
            Ok(result) => result,
            Err(reason) => return aborted(CleanupStage::ZoneChecked, reason),
        };

        let extras: Vec<String> = reconciliation.extra.iter().cloned().collect();
        let initial = self.removal_pass(CleanupPass::Initial, &target, extras);

        let enforcement = if self.options.enforce && !self.options.dry_run {
            Some(self.enforce(&target))
        } else {
            None
        };

        let summary = CleanupSummary {
            verification: Verification {
                target,
                zone,
                reconciliation,
            },
            initial,
            enforcement,
        };
        self.events.on_event(CleanupEvent::Completed {
            deleted: summary.deleted_count(),
            failed: summary.failed_count(),
        });
        info!(stage = %CleanupStage::Done, deleted = summary.deleted_count(), "cleanup finished");

        CleanupOutcome::Completed(summary)
    }

    fn locate(&self, strategy: &DiscoveryStrategy) -> Result<TargetDirectory, AbortReason> {
        self.events.on_event(CleanupEvent::DiscoveryStarted {
            strategy: strategy.clone(),
            sentinel: self.profile.sentinel.clone(),
        });

        let target = PathLocator::new(&self.fs, &self.volumes, &self.profile.sentinel)
            .with_cancel_flag(self.cancel.clone())
            .locate(strategy)
            .map_err(AbortReason::Discovery)?;

        info!(stage = %CleanupStage::Located, target = %target, "installation located");
        self.events.on_event(CleanupEvent::Located {
            target: target.path().to_path_buf(),
        });
        Ok(target)
    }

    fn check_zone(&self, target: &TargetDirectory) -> ZoneVerdict {
        let verdict = ProtectedZoneGuard.classify(target.path(), &self.profile.zones);
        if let ZoneVerdict::Protected { zone } = &verdict {
            self.events.on_event(CleanupEvent::ProtectedZone {
                target: target.path().to_path_buf(),
                zone: zone.clone(),
            });
        }
        verdict
    }

    fn reconcile(&self, target: &TargetDirectory) -> Result<ReconciliationResult, AbortReason> {
        let result = ManifestReconciler::new(&self.fs)
            .reconcile(target.path(), &self.profile.manifest)
            .map_err(|e| AbortReason::Unreadable {
                path: target.path().to_path_buf(),
                reason: e.to_string(),
            })?;

        info!(stage = %CleanupStage::Reconciled, "contents classified");
        self.events.on_event(CleanupEvent::Reconciled {
            missing: result.missing.iter().cloned().collect(),
            extra: result.extra.iter().cloned().collect(),
            missing_hint: self.profile.missing_hint.clone(),
        });
        Ok(result)
    }

    /// Re-list the directory and offer to remove whatever is still not
    /// whitelisted, including anything the first pass left behind.
    fn enforce(&mut self, target: &TargetDirectory) -> PassOutcome {
        let remaining = match ManifestReconciler::new(&self.fs).snapshot(target.path()) {
            Ok(snapshot) => ReconciliationResult::between(&self.profile.manifest, &snapshot).extra,
            Err(e) => {
                return PassOutcome::Unreadable {
                    reason: e.to_string(),
                }
            }
        };

        self.removal_pass(
            CleanupPass::Enforcement,
            target,
            remaining.into_iter().collect(),
        )
    }

    fn removal_pass(
        &mut self,
        pass: CleanupPass,
        target: &TargetDirectory,
        names: Vec<String>,
    ) -> PassOutcome {
        if names.is_empty() {
            self.events.on_event(CleanupEvent::AlreadyClean { pass });
            return PassOutcome::NothingToRemove;
        }

        self.events.on_event(CleanupEvent::RemovalProposed {
            pass,
            names: names.clone(),
        });

        if self.options.dry_run {
            return PassOutcome::Planned { names };
        }

        let prompt = match pass {
            CleanupPass::Initial => DELETE_EXTRAS_PROMPT,
            CleanupPass::Enforcement => DELETE_NON_WHITELISTED_PROMPT,
        };
        if !self.confirmer.ask(prompt) {
            self.events.on_event(CleanupEvent::RemovalDeclined {
                pass,
                names: names.clone(),
            });
            return PassOutcome::Declined { names };
        }

        let report = Remover::new(&self.fs).remove(target.path(), &names);
        info!(
            stage = %CleanupStage::Cleaned,
            pass = pass.as_str(),
            deleted = report.deleted_count(),
            failed = report.failed_count(),
            "removal pass finished"
        );

        for (name, outcome) in report.iter() {
            let event = match outcome {
                RemovalOutcome::Deleted => CleanupEvent::EntryRemoved {
                    pass,
                    name: name.to_string(),
                },
                RemovalOutcome::Failed(reason) => CleanupEvent::EntryFailed {
                    pass,
                    name: name.to_string(),
                    reason: reason.clone(),
                },
            };
            self.events.on_event(event);
        }

        PassOutcome::Removed(report)
    }
}

fn aborted(stage: CleanupStage, reason: AbortReason) -> CleanupOutcome {
    info!(%stage, %reason, "cleanup aborted");
    CleanupOutcome::Aborted { stage, reason }
}
