//! Directory listing and stage-then-swap replacement

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// List the names of regular files in `dir` whose extension is `ext`.
///
/// Symlinks are followed, so a link to a regular file is listed and a
/// dangling link is an error. Subdirectories are skipped. Names are
/// returned in ascending order.
pub fn list_files_with_extension(dir: &Path, ext: &str) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if !path.extension().is_some_and(|e| e == ext) {
            continue;
        }
        let metadata = fs::metadata(&path).map_err(|e| Error::io(&path, e))?;
        if metadata.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Replace `target` with a freshly populated directory.
///
/// A sibling staging directory is created and handed to `fill`. Only once
/// `fill` succeeds is the old `target` moved aside and the staging directory
/// renamed into place. If `fill` fails the existing `target` is untouched;
/// if the final rename fails the old directory is restored.
pub fn replace_dir_with<F>(target: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let parent = target.parent().ok_or_else(|| Error::Staging {
        path: target.to_path_buf(),
        message: "target has no parent directory".into(),
    })?;
    fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;

    clear_stale_siblings(target);

    let staging = sibling(target, "staging");
    if staging.exists() {
        fs::remove_dir_all(&staging).map_err(|e| Error::io(&staging, e))?;
    }
    fs::create_dir(&staging).map_err(|e| Error::io(&staging, e))?;

    if let Err(e) = fill(&staging) {
        discard(&staging);
        return Err(e);
    }

    let backup = if target.exists() {
        let backup = sibling(target, "old");
        if backup.exists() {
            fs::remove_dir_all(&backup).map_err(|e| Error::io(&backup, e))?;
        }
        if let Err(e) = fs::rename(target, &backup) {
            discard(&staging);
            return Err(Error::io(target, e));
        }
        Some(backup)
    } else {
        None
    };

    if let Err(e) = fs::rename(&staging, target) {
        if let Some(backup) = &backup {
            if let Err(restore) = fs::rename(backup, target) {
                tracing::error!(
                    path = %target.display(),
                    error = %restore,
                    "failed to restore previous directory"
                );
            }
        }
        discard(&staging);
        return Err(Error::Staging {
            path: target.to_path_buf(),
            message: e.to_string(),
        });
    }

    if let Some(backup) = backup {
        discard(&backup);
    }

    tracing::debug!(path = %target.display(), "swapped staged directory into place");
    Ok(())
}

/// `<parent>/.<name>.<tag>-<pid>`
fn sibling(target: &Path, tag: &str) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{}.{}-{}", name, tag, std::process::id()))
}

/// Remove staging and backup directories left by an interrupted earlier run.
fn clear_stale_siblings(target: &Path) {
    let (Some(parent), Some(name)) = (target.parent(), target.file_name()) else {
        return;
    };
    let name = name.to_string_lossy();
    let prefixes = [format!(".{}.staging-", name), format!(".{}.old-", name)];

    let Ok(entries) = fs::read_dir(parent) else {
        return;
    };
    for entry in entries.filter_map(|entry| entry.ok()) {
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !prefixes.iter().any(|p| file_name.starts_with(p.as_str())) {
            continue;
        }
        // Only directories; anything else is not ours to delete
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            tracing::debug!(path = %entry.path().display(), "removing stale sibling");
            discard(&entry.path());
        }
    }
}

fn discard(path: &Path) {
    if let Err(e) = fs::remove_dir_all(path) {
        tracing::warn!(path = %path.display(), error = %e, "failed to remove leftover directory");
    }
}
