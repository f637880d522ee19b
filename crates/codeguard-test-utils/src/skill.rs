//! [`SkillTree`] builder for generated skill bundles.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary skill bundle: `SKILL.md` plus `rules/*.md`.
pub struct SkillTree {
    temp_dir: TempDir,
}

impl Default for SkillTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillTree {
    /// An empty bundle with a `rules/` directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("rules")).unwrap();
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn rules_dir(&self) -> PathBuf {
        self.path().join("rules")
    }

    pub fn write_skill(&self, content: &str) -> &Self {
        fs::write(self.path().join("SKILL.md"), content).unwrap();
        self
    }

    pub fn write_rule(&self, name: &str, content: &str) -> &Self {
        fs::write(self.rules_dir().join(name), content).unwrap();
        self
    }

    pub fn remove_rule(&self, name: &str) -> &Self {
        fs::remove_file(self.rules_dir().join(name)).unwrap();
        self
    }
}

/// Every regular file under `dir`, keyed by path relative to `dir`.
///
/// Used to compare a cache against its source by name and bytes.
pub fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut files = BTreeMap::new();
    collect(dir, dir, &mut files);
    files
}

fn collect(root: &Path, dir: &Path, files: &mut BTreeMap<String, Vec<u8>>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect(root, &path, files);
        } else {
            let rel = path
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            files.insert(rel, fs::read(&path).unwrap());
        }
    }
}
