//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `confirm/` - Terminal and line-based confirmers
//! - `events/` - Machine-readable event output
//! - `volumes` / `environment` - Platform lookups

pub mod confirm;
pub mod environment;
pub mod events;
pub mod fs;
pub mod volumes;

// Re-export for convenience
pub use confirm::{DialoguerConfirmer, LineConfirmer};
pub use environment::{MapEnvironment, ProcessEnvironment};
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use volumes::SystemVolumes;
