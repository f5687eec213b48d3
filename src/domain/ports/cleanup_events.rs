//! Cleanup Event Port
//!
//! Everything a cleanup run wants to tell the user is emitted as an event.
//! The CLI renders them to the console or as an NDJSON stream.

use std::path::PathBuf;

use crate::domain::value_objects::DiscoveryStrategy;

/// Which removal round an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupPass {
    /// Removal of the extras found by the first reconciliation
    Initial,
    /// Re-listing and removal of anything still not whitelisted
    Enforcement,
}

impl CleanupPass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CleanupPass::Initial => "initial",
            CleanupPass::Enforcement => "enforcement",
        }
    }
}

/// Event emitted during a cleanup run
#[derive(Debug, Clone)]
pub enum CleanupEvent {
    /// Discovery started
    DiscoveryStarted {
        strategy: DiscoveryStrategy,
        sentinel: String,
    },

    /// Installation directory found
    Located { target: PathBuf },

    /// Target lies inside a protected zone
    ProtectedZone { target: PathBuf, zone: PathBuf },

    /// User asked for protected zones and safe install locations
    ZoneGuidance {
        zones: Vec<PathBuf>,
        safe_locations: Vec<String>,
    },

    /// First reconciliation finished
    Reconciled {
        missing: Vec<String>,
        extra: Vec<String>,
        missing_hint: String,
    },

    /// Entries proposed for removal in a pass
    RemovalProposed {
        pass: CleanupPass,
        names: Vec<String>,
    },

    /// User declined removal in a pass
    RemovalDeclined {
        pass: CleanupPass,
        names: Vec<String>,
    },

    /// Entry was deleted
    EntryRemoved { pass: CleanupPass, name: String },

    /// Entry could not be deleted
    EntryFailed {
        pass: CleanupPass,
        name: String,
        reason: String,
    },

    /// Directory already holds only whitelisted entries
    AlreadyClean { pass: CleanupPass },

    /// Run completed
    Completed { deleted: usize, failed: usize },
}

/// Trait for receiving cleanup events
///
/// Implementations can be:
/// - ConsoleEventSink: Human readable lines on stdout
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait CleanupEventSink {
    /// Handle a cleanup event
    fn on_event(&self, event: CleanupEvent);
}

impl<S: CleanupEventSink + ?Sized> CleanupEventSink for &S {
    fn on_event(&self, event: CleanupEvent) {
        (**self).on_event(event)
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl CleanupEventSink for NoopEventSink {
    fn on_event(&self, _event: CleanupEvent) {}
}
