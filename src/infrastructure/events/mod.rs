//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for automation
//!
//! The human-readable console sink lives with the CLI views.

mod json;

pub use json::JsonEventSink;
