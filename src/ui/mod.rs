//! Terminal UI
//!
//! Design tokens, primitives, and views for human-readable output.

pub mod blocks;
pub mod context;
pub mod error;
pub mod primitives;
pub mod sink;
pub mod terminal;
pub mod theme;
pub mod views;
