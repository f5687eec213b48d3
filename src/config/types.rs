//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::cleanup::CleanupProfile;
use crate::domain::entities::Manifest;
use crate::domain::policies::{ProtectedZoneSet, DEFAULT_ZONE_SPECS};
use crate::domain::ports::Environment;
use crate::error::{VanillafyError, VanillafyResult};

use super::loader::{self, ConfigWarning};

const DEFAULT_GAME_NAME: &str = "SkyrimVR";
const DEFAULT_SENTINEL: &str = "SkyrimVR.exe";

/// Top-level entries of a vanilla SkyrimVR install.
const DEFAULT_MANIFEST: &[&str] = &[
    "SkyrimVR.exe",
    "steam_api64.dll",
    "binkw64.dll",
    "atimgpud.dll",
    "High.ini",
    "Medium.ini",
    "Low.ini",
    "Skyrim.ini",
    "openvr_api.dll",
    "installscript.vdf",
    "Data",
];

const DEFAULT_SAFE_LOCATIONS: &[&str] = &[
    "C:\\SteamLibrary\\steamapps\\common\\SkyrimVR",
    "D:\\SteamLibrary\\steamapps\\common\\SkyrimVR",
    "E:\\SteamLibrary\\steamapps\\common\\SkyrimVR",
    "F:\\SteamLibrary\\steamapps\\common\\SkyrimVR",
];

const DEFAULT_MISSING_HINT: &str = "To fix this, open Steam, go to your library, right-click \
SkyrimVR, and select 'Properties'. Then, navigate to 'Local Files' and click 'Verify integrity \
of game files'.";

/// Which game is being cleaned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_game_name")]
    pub name: String,

    /// File whose presence marks the installation root
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            name: default_game_name(),
            sentinel: default_sentinel(),
        }
    }
}

fn default_game_name() -> String {
    DEFAULT_GAME_NAME.to_string()
}

fn default_sentinel() -> String {
    DEFAULT_SENTINEL.to_string()
}

/// Whitelisted top-level entry names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_entries")]
    pub entries: Vec<String>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            entries: default_manifest_entries(),
        }
    }
}

fn default_manifest_entries() -> Vec<String> {
    DEFAULT_MANIFEST.iter().map(|s| s.to_string()).collect()
}

/// Protected zone configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedConfig {
    /// Resolve the built-in Windows system folders from the environment
    #[serde(default = "default_true")]
    pub include_defaults: bool,

    #[serde(default)]
    pub extra: Vec<PathBuf>,
}

impl Default for ProtectedConfig {
    fn default() -> Self {
        Self {
            include_defaults: true,
            extra: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Advice shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceConfig {
    #[serde(default = "default_safe_locations")]
    pub safe_locations: Vec<String>,

    /// Shown when manifest entries are missing from the install
    #[serde(default = "default_missing_hint")]
    pub missing_hint: String,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            safe_locations: default_safe_locations(),
            missing_hint: default_missing_hint(),
        }
    }
}

fn default_safe_locations() -> Vec<String> {
    DEFAULT_SAFE_LOCATIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_missing_hint() -> String {
    DEFAULT_MISSING_HINT.to_string()
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub protected: ProtectedConfig,

    #[serde(default)]
    pub guidance: GuidanceConfig,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &Path) -> VanillafyResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load configuration and return non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> VanillafyResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the config file to use and load it, or fall back to defaults.
    pub fn discover(
        explicit: Option<&Path>,
        env: &impl Environment,
    ) -> VanillafyResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, env)
    }

    /// Apply environment variable overrides (VANILLAFY_* prefix)
    pub fn with_env_overrides(self, env: &impl Environment) -> Self {
        loader::with_env_overrides(self, env)
    }

    /// Reject configurations that could never describe a clean install.
    pub fn validate(&self, file: &Path) -> VanillafyResult<()> {
        let invalid = |message: &str| VanillafyError::InvalidConfig {
            file: file.to_path_buf(),
            message: message.to_string(),
        };

        if self.game.sentinel.trim().is_empty() {
            return Err(invalid("game.sentinel must not be empty"));
        }
        if self.manifest.entries.is_empty() {
            return Err(invalid("manifest.entries must not be empty"));
        }
        if !self.manifest.entries.contains(&self.game.sentinel) {
            return Err(invalid(
                "manifest.entries must contain game.sentinel, or every cleanup would delete it",
            ));
        }
        Ok(())
    }

    pub fn manifest(&self) -> Manifest {
        Manifest::new(self.manifest.entries.iter().cloned())
    }

    /// Default zones resolved through `env` (if enabled), then the extras.
    pub fn protected_zones(&self, env: &impl Environment) -> ProtectedZoneSet {
        let base = if self.protected.include_defaults {
            ProtectedZoneSet::from_specs(DEFAULT_ZONE_SPECS, env)
        } else {
            ProtectedZoneSet::default()
        };
        base.with_extra(self.protected.extra.iter().cloned())
    }

    /// Everything a cleanup run needs to know about the game.
    pub fn profile(&self, env: &impl Environment) -> CleanupProfile {
        CleanupProfile {
            sentinel: self.game.sentinel.clone(),
            manifest: self.manifest(),
            zones: self.protected_zones(env),
            safe_locations: self.guidance.safe_locations.clone(),
            missing_hint: self.guidance.missing_hint.clone(),
        }
    }
}
