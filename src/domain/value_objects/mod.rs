//! Value Objects
//!
//! Small immutable types identified by their value.

mod cancel;
mod strategy;
mod target;
mod volume;

pub use cancel::{CancelFlag, ScanGuard};
pub use strategy::DiscoveryStrategy;
pub use target::TargetDirectory;
pub use volume::VolumeId;
