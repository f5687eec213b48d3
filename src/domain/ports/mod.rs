//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod cleanup_events;
pub mod confirmer;
pub mod environment;
pub mod file_system;
pub mod volume_source;

pub use cleanup_events::{CleanupEvent, CleanupEventSink, CleanupPass, NoopEventSink};
pub use confirmer::{AssumeNo, AssumeYes, Confirmer};
pub use environment::Environment;
pub use file_system::{DirEntryInfo, EntryKind, FileSystem, FsError, FsResult};
pub use volume_source::VolumeSource;
