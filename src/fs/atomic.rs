//! Atomic write-back of the filled template.
//!
//! The template document is the only file taskfill ever writes, and only when
//! asked to with `--write`. The write goes through a sibling temporary file:
//!
//! 1. Write the new content to `.{filename}.tmp` next to the target
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! A crash or interruption therefore leaves either the old template or the new
//! one, never a truncated mix. `rename` replaces an existing target on both
//! POSIX and Windows as long as both paths live on the same volume, which the
//! sibling temp file guarantees.
//!
//! An existing target keeps its permissions. A symlinked target keeps its
//! link; the write lands on the file it points to.

use crate::error::{Result, TaskfillError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically replace `path` with `content`.
///
/// # Returns
///
/// * `Ok(())` - The target now holds exactly `content`
/// * `Err(TaskfillError::Io)` - Writing, syncing, or renaming failed; the
///   temporary file is removed and the target is left untouched
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let target = resolve_target(path.as_ref());
    let temp_path = generate_temp_path(&target)?;

    write_and_sync(&temp_path, content.as_bytes())?;

    if let Ok(metadata) = fs::metadata(&target)
        && let Err(e) = fs::set_permissions(&temp_path, metadata.permissions())
    {
        let _ = fs::remove_file(&temp_path);
        return Err(TaskfillError::io("write", &temp_path, e));
    }

    fs::rename(&temp_path, &target).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TaskfillError::io("replace", &target, e)
    })?;

    sync_parent_dir(&target);
    Ok(())
}

/// The file a write to `path` should replace.
///
/// A symlink resolves to the file it points to. A dangling link cannot be
/// resolved and is replaced itself.
fn resolve_target(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

/// Persist the directory entry of a freshly renamed file.
#[cfg(unix)]
fn sync_parent_dir(path: &Path) {
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) {}

/// Temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let filename = target.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        TaskfillError::UserError(format!("invalid file path '{}'", target.display()))
    })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| TaskfillError::io("create", path, e))?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(TaskfillError::io("write", path, e));
    }

    Ok(())
}
