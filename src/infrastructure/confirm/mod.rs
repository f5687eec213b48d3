//! Confirmer implementations
//!
//! - `DialoguerConfirmer` for interactive terminals
//! - `LineConfirmer` for piped input and tests

mod line;
mod terminal;

pub use line::LineConfirmer;
pub use terminal::DialoguerConfirmer;
