//! Error types for vanillafy
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::services::DiscoveryError;

/// Result type alias for vanillafy operations
pub type VanillafyResult<T> = Result<T, VanillafyError>;

/// Main error type for vanillafy operations
#[derive(Error, Debug)]
pub enum VanillafyError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No installation could be located
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// Configuration file could not be parsed or is inconsistent
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Menu answer was not one of the offered choices
    #[error("invalid choice '{0}', expected 1, 2 or 3")]
    InvalidMenuChoice(String),
}
