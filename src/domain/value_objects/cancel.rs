//! Cooperative cancellation for long-running scans

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag checked between directory visits.
///
/// Clones observe the same flag, so the CLI can hand one clone to a Ctrl+C
/// handler and another to the scan. The flag also records whether a scan is
/// running, since a cancel request only has an effect during one.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
    scanning: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Mark a scan as running until the returned guard is dropped.
    pub fn begin_scan(&self) -> ScanGuard {
        self.scanning.store(true, Ordering::SeqCst);
        ScanGuard {
            scanning: Arc::clone(&self.scanning),
        }
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning.load(Ordering::SeqCst)
    }
}

/// Clears the scanning mark of a [`CancelFlag`] on drop.
#[derive(Debug)]
pub struct ScanGuard {
    scanning: Arc<AtomicBool>,
}

impl Drop for ScanGuard {
    fn drop(&mut self) {
        self.scanning.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let flag = CancelFlag::new();
        let handle = flag.clone();
        assert!(!flag.is_cancelled());

        handle.cancel();
        assert!(flag.is_cancelled());
    }

    #[test]
    fn scanning_lasts_as_long_as_the_guard() {
        let flag = CancelFlag::new();
        let handle = flag.clone();
        assert!(!handle.is_scanning());

        let guard = flag.begin_scan();
        assert!(handle.is_scanning());

        drop(guard);
        assert!(!handle.is_scanning());
    }
}
