//! Configuration module for vanillafy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (VANILLAFY_*)
//! 3. Config file (`--config`, `VANILLAFY_CONFIG`, or ~/.config/vanillafy/config.toml)
//! 4. Built-in defaults for SkyrimVR (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, CONFIG_ENV, SENTINEL_ENV};
pub use types::{Config, GameConfig, GuidanceConfig, ManifestConfig, ProtectedConfig};
