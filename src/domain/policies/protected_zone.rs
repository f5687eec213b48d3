//! Protected Zone Policy
//!
//! Decides whether a target directory sits inside a location that should
//! not be cleaned without an explicit confirmation. Pure: no I/O, no
//! blocking. The caller decides what to do with a `Protected` verdict.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::domain::ports::Environment;

/// A zone prefix derived from an environment key, optionally extended by one
/// child folder (e.g. `USERPROFILE` + `Desktop`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneSpec {
    pub key: &'static str,
    pub child: Option<&'static str>,
}

impl ZoneSpec {
    pub const fn var(key: &'static str) -> Self {
        Self { key, child: None }
    }

    pub const fn child_of(key: &'static str, child: &'static str) -> Self {
        Self {
            key,
            child: Some(child),
        }
    }

    /// Resolve against an environment. Unset or empty keys stay absent.
    pub fn resolve(&self, env: &impl Environment) -> Option<PathBuf> {
        let base = env.lookup(self.key).filter(|v| !v.trim().is_empty())?;
        Some(match self.child {
            None => PathBuf::from(base),
            Some(child) => PathBuf::from(format!(
                "{}{}{}",
                base.trim_end_matches(['\\', '/']),
                MAIN_SEPARATOR,
                child
            )),
        })
    }
}

/// System and user-profile locations a game should not be installed in.
pub const DEFAULT_ZONE_SPECS: &[ZoneSpec] = &[
    ZoneSpec::var("PROGRAMFILES"),
    ZoneSpec::var("PROGRAMFILES(X86)"),
    ZoneSpec::child_of("SYSTEMDRIVE", "Windows"),
    ZoneSpec::child_of("SYSTEMDRIVE", "Users"),
    ZoneSpec::var("ALLUSERSPROFILE"),
    ZoneSpec::var("APPDATA"),
    ZoneSpec::var("LOCALAPPDATA"),
    ZoneSpec::child_of("USERPROFILE", "Desktop"),
    ZoneSpec::child_of("USERPROFILE", "Documents"),
];

/// Ordered sequence of protected prefixes; unresolved entries are kept as
/// `None` and never match anything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProtectedZoneSet {
    zones: Vec<Option<PathBuf>>,
}

impl ProtectedZoneSet {
    pub fn new(zones: Vec<Option<PathBuf>>) -> Self {
        Self { zones }
    }

    /// Resolve every spec against the environment, keeping spec order.
    pub fn from_specs(specs: &[ZoneSpec], env: &impl Environment) -> Self {
        Self::new(specs.iter().map(|spec| spec.resolve(env)).collect())
    }

    /// Append literal prefixes (from configuration).
    pub fn with_extra<I>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.zones.extend(extra.into_iter().map(|p| {
            if p.as_os_str().is_empty() {
                None
            } else {
                Some(p)
            }
        }));
        self
    }

    /// Resolved prefixes, in order.
    pub fn present(&self) -> impl Iterator<Item = &Path> {
        self.zones.iter().filter_map(|z| z.as_deref())
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// Outcome of a zone check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneVerdict {
    Safe,
    /// Inside the given zone prefix
    Protected { zone: PathBuf },
}

impl ZoneVerdict {
    pub fn is_protected(&self) -> bool {
        matches!(self, ZoneVerdict::Protected { .. })
    }
}

/// Classifies paths against a [`ProtectedZoneSet`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtectedZoneGuard;

impl ProtectedZoneGuard {
    /// `Protected` as soon as a present zone is a case-insensitive string
    /// prefix of `path`; `Safe` if none is.
    pub fn classify(&self, path: &Path, zones: &ProtectedZoneSet) -> ZoneVerdict {
        let candidate = lowered(path);

        zones
            .present()
            .find(|zone| candidate.starts_with(&lowered(zone)))
            .map(|zone| ZoneVerdict::Protected {
                zone: zone.to_path_buf(),
            })
            .unwrap_or(ZoneVerdict::Safe)
    }
}

fn lowered(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}
