//! Domain Services
//!
//! Discovery, reconciliation and removal. Each service borrows its ports and
//! owns no state between calls.

pub mod locator;
pub mod reconciler;
pub mod remover;

#[cfg(test)]
pub(crate) mod test_support;

pub use locator::{DiscoveryError, PathLocator};
pub use reconciler::ManifestReconciler;
pub use remover::{RemovalOutcome, RemovalReport, Remover};
