//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ports::Environment;
use crate::error::{VanillafyError, VanillafyResult};

use super::types::Config;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "VANILLAFY_CONFIG";
/// Environment variable overriding `game.sentinel`.
pub const SENTINEL_ENV: &str = "VANILLAFY_SENTINEL";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> VanillafyResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| VanillafyError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    config.validate(path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config file: the explicit path, then `VANILLAFY_CONFIG`, then
/// the user config directory. Defaults apply when none of them exists.
///
/// An explicitly named file that cannot be read is an error; a missing user
/// config is not.
pub fn discover(
    explicit: Option<&Path>,
    env: &impl Environment,
) -> VanillafyResult<(Config, Vec<ConfigWarning>)> {
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| env.lookup(CONFIG_ENV).map(PathBuf::from));

    let (config, warnings) = match named {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => match user_config_path().filter(|p| p.is_file()) {
            Some(path) => {
                debug!(path = %path.display(), "loading user config");
                load_with_warnings(&path)?
            }
            None => (Config::default(), Vec::new()),
        },
    };

    Ok((with_env_overrides(config, env), warnings))
}

/// `<config_dir>/vanillafy/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vanillafy").join("config.toml"))
}

/// Apply environment variable overrides (VANILLAFY_* prefix)
pub fn with_env_overrides(mut config: Config, env: &impl Environment) -> Config {
    if let Some(sentinel) = env.lookup(SENTINEL_ENV) {
        let sentinel = sentinel.trim().to_string();
        if !sentinel.is_empty() {
            if !config.manifest.entries.contains(&sentinel) {
                config.manifest.entries.push(sentinel.clone());
            }
            config.game.sentinel = sentinel;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "game",
        "name",
        "sentinel",
        "manifest",
        "entries",
        "protected",
        "include_defaults",
        "extra",
        "guidance",
        "safe_locations",
        "missing_hint",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
