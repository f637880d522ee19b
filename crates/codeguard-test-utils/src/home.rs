//! [`TestHome`] builder for plugin cache scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Plugin root relative to the home directory.
pub const PLUGIN_ROOT: &str = ".claude/plugins/cache/project-codeguard/codeguard-security";

/// A temporary home directory.
///
/// # Example
///
/// ```rust,no_run
/// use codeguard_test_utils::TestHome;
///
/// let home = TestHome::new();
/// home.install_version("1.2.0");
/// assert!(home.skill_dir("1.2.0").exists());
/// ```
pub struct TestHome {
    temp_dir: TempDir,
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHome {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the fake home directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn plugin_root(&self) -> PathBuf {
        self.path().join(PLUGIN_ROOT)
    }

    /// `<plugin root>/<version>/skills/software-security`
    pub fn skill_dir(&self, version: &str) -> PathBuf {
        self.plugin_root()
            .join(version)
            .join("skills")
            .join("software-security")
    }

    /// Create an installed version with an empty `rules/` directory.
    pub fn install_version(&self, version: &str) -> PathBuf {
        let skill_dir = self.skill_dir(version);
        fs::create_dir_all(skill_dir.join("rules")).unwrap();
        skill_dir
    }

    /// Create the plugin root with no versions inside.
    pub fn create_empty_plugin_root(&self) {
        fs::create_dir_all(self.plugin_root()).unwrap();
    }
}
