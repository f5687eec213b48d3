//! Domain Entities

mod manifest;
mod reconciliation;
mod snapshot;

pub use manifest::Manifest;
pub use reconciliation::ReconciliationResult;
pub use snapshot::DirectorySnapshot;
