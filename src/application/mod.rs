//! Application Layer
//!
//! Use cases that wire domain services to ports.

pub mod cleanup;

pub use cleanup::{CleanupOptions, CleanupOutcome, CleanupProfile, CleanupUseCase};
