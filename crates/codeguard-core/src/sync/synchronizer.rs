//! Cache synchronization logic

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use codeguard_fs::{dir, io};

use super::SyncResult;
use crate::{Error, Result};

/// Companion file at the top of a skill bundle
pub const SKILL_FILE: &str = "SKILL.md";

/// Subdirectory of a skill bundle holding the rule documents
pub const RULES_DIR: &str = "rules";

const RULE_EXTENSION: &str = "md";

/// Makes a cached skill bundle match a freshly generated one.
///
/// Only the core rule bundle belongs in the plugin cache; callers decide
/// whether the bundle they hold qualifies. Rules are expected to have been
/// validated before they reach the synchronizer.
#[derive(Debug, Clone)]
pub struct CacheSynchronizer {
    source_dir: PathBuf,
    cache_dir: PathBuf,
}

impl CacheSynchronizer {
    /// # Arguments
    ///
    /// * `source_dir` - The generated skill bundle (`SKILL.md` + `rules/`)
    /// * `cache_dir` - The cached skill bundle to replace; may not exist yet
    pub fn new(source_dir: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            cache_dir: cache_dir.into(),
        }
    }

    /// Replace the cached rules with the source rules and report what is new.
    ///
    /// The cached `rules/` directory is rebuilt in a staging directory and
    /// swapped in, so a failed copy leaves the previous cache intact.
    ///
    /// # Errors
    ///
    /// [`Error::SourceUnreadable`] when the source bundle cannot be read.
    /// A cache that cannot be listed or written is not an error: it yields
    /// [`SyncResult::failed`].
    pub fn sync(&self) -> Result<SyncResult> {
        let source_rules = self.source_dir.join(RULES_DIR);
        let after = dir::list_files_with_extension(&source_rules, RULE_EXTENSION)
            .map_err(|e| Error::source_unreadable(&source_rules, e))?;
        let skill = self.read_source_skill()?;

        let cache_rules = self.cache_dir.join(RULES_DIR);
        let before = match cached_rule_names(&cache_rules) {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(
                    cache = %self.cache_dir.display(),
                    error = %e,
                    "cannot list cached rules"
                );
                return Ok(SyncResult::failed());
            }
        };

        let new_rules: Vec<String> = after
            .iter()
            .filter(|name| !before.contains(*name))
            .cloned()
            .collect();
        let after_set: BTreeSet<&String> = after.iter().collect();
        let removed_rules: Vec<String> = before
            .iter()
            .filter(|name| !after_set.contains(name))
            .cloned()
            .collect();

        if let Err(e) = self.replace_cache(&source_rules, &after, skill.as_deref()) {
            tracing::warn!(
                cache = %self.cache_dir.display(),
                error = %e,
                pending_new = ?new_rules,
                "failed to update plugin cache"
            );
            return Ok(SyncResult::failed());
        }

        tracing::info!(
            cache = %self.cache_dir.display(),
            rules = after.len(),
            new = new_rules.len(),
            removed = removed_rules.len(),
            "plugin cache updated"
        );
        Ok(SyncResult::synced(new_rules, removed_rules))
    }

    /// `SKILL.md` is optional; when absent the cached copy is left alone.
    fn read_source_skill(&self) -> Result<Option<Vec<u8>>> {
        let path = self.source_dir.join(SKILL_FILE);
        if !path.exists() {
            return Ok(None);
        }
        fs::read(&path)
            .map(Some)
            .map_err(|e| Error::source_unreadable(&path, e))
    }

    fn replace_cache(
        &self,
        source_rules: &Path,
        names: &[String],
        skill: Option<&[u8]>,
    ) -> codeguard_fs::Result<()> {
        fs::create_dir_all(&self.cache_dir)
            .map_err(|e| codeguard_fs::Error::io(&self.cache_dir, e))?;

        // SKILL.md first: once the rules are swapped in they count as cached
        if let Some(bytes) = skill {
            io::write_atomic(&self.cache_dir.join(SKILL_FILE), bytes)?;
        }

        dir::replace_dir_with(&self.cache_dir.join(RULES_DIR), |staging| {
            for name in names {
                io::copy_file(&source_rules.join(name), &staging.join(name))?;
            }
            Ok(())
        })
    }
}

/// Rule filenames currently in the cache; empty when there is no cache yet.
fn cached_rule_names(cache_rules: &Path) -> codeguard_fs::Result<BTreeSet<String>> {
    if !cache_rules.exists() {
        return Ok(BTreeSet::new());
    }
    let names = dir::list_files_with_extension(cache_rules, RULE_EXTENSION)?;
    Ok(names.into_iter().collect())
}
