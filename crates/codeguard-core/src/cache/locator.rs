//! Plugin cache path resolution

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::{HomeProvider, MARKETPLACE_NAME, PLUGIN_NAME, SKILL_NAME, SystemHome};

/// Identifies a plugin's skill inside the plugin cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginCoordinates {
    pub marketplace: String,
    pub plugin: String,
    pub skill: String,
}

impl Default for PluginCoordinates {
    fn default() -> Self {
        Self {
            marketplace: MARKETPLACE_NAME.to_string(),
            plugin: PLUGIN_NAME.to_string(),
            skill: SKILL_NAME.to_string(),
        }
    }
}

/// An installed plugin version and the skill bundle inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCache {
    /// Name of the selected version directory (e.g. `1.2.0`)
    pub version: String,
    /// `<plugin root>/<version>/`
    pub version_dir: PathBuf,
    /// `<version_dir>/skills/<skill>/`, holding `SKILL.md` and `rules/`
    pub skill_dir: PathBuf,
}

impl ResolvedCache {
    pub fn rules_dir(&self) -> PathBuf {
        self.skill_dir.join("rules")
    }
}

/// Why no plugin cache was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The home directory could not be determined or does not exist
    NoHomeDirectory,
    /// The plugin root directory is absent or unreadable
    PluginNotInstalled { root: PathBuf },
    /// The plugin root exists but holds no version directories
    NoVersions { root: PathBuf },
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHomeDirectory => write!(f, "home directory not available"),
            Self::PluginNotInstalled { root } => {
                write!(f, "plugin not installed (no {})", root.display())
            }
            Self::NoVersions { root } => {
                write!(f, "no installed versions under {}", root.display())
            }
        }
    }
}

/// Outcome of [`CachePathLocator::locate`].
///
/// Absence is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLocation {
    Found(ResolvedCache),
    NotFound(NotFoundReason),
}

impl CacheLocation {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn found(&self) -> Option<&ResolvedCache> {
        match self {
            Self::Found(resolved) => Some(resolved),
            Self::NotFound(_) => None,
        }
    }
}

/// Finds the newest installed version of a plugin in the Claude plugin cache.
#[derive(Debug, Clone)]
pub struct CachePathLocator<H = SystemHome> {
    home: H,
    coordinates: PluginCoordinates,
}

impl CachePathLocator<SystemHome> {
    /// Locator for the running user's real home directory.
    pub fn system() -> Self {
        Self::new(SystemHome)
    }
}

impl<H: HomeProvider> CachePathLocator<H> {
    pub fn new(home: H) -> Self {
        Self {
            home,
            coordinates: PluginCoordinates::default(),
        }
    }

    pub fn with_coordinates(mut self, coordinates: PluginCoordinates) -> Self {
        self.coordinates = coordinates;
        self
    }

    /// `<home>/.claude/plugins/cache/<marketplace>/<plugin>/`
    pub fn plugin_root(&self) -> Option<PathBuf> {
        self.home.home_dir().map(|h| self.root_under(&h))
    }

    fn root_under(&self, home: &Path) -> PathBuf {
        home.join(".claude")
            .join("plugins")
            .join("cache")
            .join(&self.coordinates.marketplace)
            .join(&self.coordinates.plugin)
    }

    /// Resolve the skill directory of the newest installed version.
    pub fn locate(&self) -> CacheLocation {
        let Some(home) = self.home.home_dir().filter(|h| h.is_dir()) else {
            tracing::debug!("no usable home directory");
            return CacheLocation::NotFound(NotFoundReason::NoHomeDirectory);
        };
        let root = self.root_under(&home);

        let entries = match fs::read_dir(&root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(root = %root.display(), error = %e, "plugin root not readable");
                return CacheLocation::NotFound(NotFoundReason::PluginNotInstalled { root });
            }
        };

        let versions: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();

        let Some(version) = select_latest_version(versions.iter().map(String::as_str)) else {
            tracing::debug!(root = %root.display(), "plugin root has no version directories");
            return CacheLocation::NotFound(NotFoundReason::NoVersions { root });
        };

        let version_dir = root.join(version);
        let skill_dir = version_dir.join("skills").join(&self.coordinates.skill);
        tracing::debug!(
            version,
            candidates = versions.len(),
            skill_dir = %skill_dir.display(),
            "resolved plugin cache"
        );

        CacheLocation::Found(ResolvedCache {
            version: version.to_string(),
            version_dir,
            skill_dir,
        })
    }
}

/// Pick the newest version name.
///
/// Names that parse as semver (optionally prefixed with `v`) outrank names
/// that do not. Semver names compare by version, the rest lexically, and
/// equal versions (`1.2.0` vs `v1.2.0`) fall back to the lexical maximum.
pub fn select_latest_version<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    names.into_iter().max_by(|a, b| {
        let key_a = (parse_version(a), *a);
        let key_b = (parse_version(b), *b);
        key_a.cmp(&key_b)
    })
}

fn parse_version(name: &str) -> Option<semver::Version> {
    semver::Version::parse(name.strip_prefix('v').unwrap_or(name)).ok()
}
