//! Atomic file writes for rendered configuration.
//!
//! All writes follow this pattern:
//! 1. Resolve a symlinked destination to the file it points at
//! 2. Create the parent directory if it is missing
//! 3. Write content to a temporary file next to that file
//! 4. Sync the file to disk (fsync) and copy the old file's permissions
//! 5. Rename it over the target
//!
//! The target is either untouched or fully replaced. A pre-existing file
//! is overwritten without a backup.
//!
//! # Important Notes
//!
//! - On POSIX, `rename()` is atomic only within one filesystem, which is
//!   why the temporary file lives next to the target
//! - A symlink stays a symlink; the file it points at gets the new content
//! - Ownership is not carried over; the new file belongs to the writer
//! - A target that cannot be renamed over (`EBUSY`, e.g. a bind-mounted
//!   file) is rewritten in place, which is not atomic
//! - On crash, a temporary file may remain (named `.{filename}.tmp`)

use crate::error::{RenderError, Result};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating its parent directory if needed.
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(RenderError::IoError)` - On directory creation, write or rename failure
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let target = resolve_target(path)?;
    ensure_parent_dir(&target)?;

    let temp_path = generate_temp_path(&target)?;
    write_and_sync(&temp_path, content)?;
    copy_permissions(&target, &temp_path)?;
    atomic_replace(&temp_path, &target)?;

    Ok(())
}

/// Atomically write a string to a file.
///
/// Convenience wrapper around `atomic_write` for string content.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Create the parent directory of `path` (recursively) if it does not exist.
///
/// A path with no directory component (`frr.conf`) needs nothing created.
/// Returns whether a directory was created.
pub fn ensure_parent_dir(path: &Path) -> Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(false),
    };

    if parent.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(parent).map_err(|e| {
        RenderError::IoError(format!(
            "failed to create output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    tracing::info!(directory = %parent.display(), "created output directory");
    Ok(true)
}

/// The file a write to `path` should land in.
///
/// A symlink resolves to the file it points at, even when that file does
/// not exist yet. Anything else is returned unchanged.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    let is_symlink = fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);
    if !is_symlink {
        return Ok(path.to_path_buf());
    }

    if let Ok(resolved) = fs::canonicalize(path) {
        return Ok(resolved);
    }

    // Dangling link: create the file it names.
    let link = fs::read_link(path).map_err(|e| {
        RenderError::IoError(format!(
            "failed to read symlink '{}': {}",
            path.display(),
            e
        ))
    })?;
    Ok(match path.parent() {
        Some(parent) if link.is_relative() => parent.join(link),
        _ => link,
    })
}

/// Give `temp` the permissions of an existing `target`.
fn copy_permissions(target: &Path, temp: &Path) -> Result<()> {
    let permissions = match fs::metadata(target) {
        Ok(meta) => meta.permissions(),
        Err(_) => return Ok(()),
    };

    fs::set_permissions(temp, permissions).map_err(|e| {
        let _ = fs::remove_file(temp);
        RenderError::IoError(format!(
            "failed to copy permissions of '{}': {}",
            target.display(),
            e
        ))
    })
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new(""));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            RenderError::IoError(format!("invalid output path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to a file and sync to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        RenderError::IoError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        RenderError::IoError(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        RenderError::IoError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

/// Rename the source file over the target.
///
/// Falls back to copying into the target when it is busy.
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    let renamed = match fs::rename(source, target) {
        Err(e) if e.kind() == ErrorKind::ResourceBusy => {
            tracing::warn!(
                path = %target.display(),
                "output file is busy, rewriting it in place"
            );
            fs::copy(source, target).map(|_| ())
        }
        other => other,
    };

    if let Err(e) = renamed {
        let _ = fs::remove_file(source);
        return Err(RenderError::IoError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        )));
    }

    if source.exists() {
        let _ = fs::remove_file(source);
    }
    sync_parent_dir(target);
    Ok(())
}

/// Persist the directory entry of a freshly renamed file.
#[cfg(unix)]
fn sync_parent_dir(target: &Path) {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty())
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_target: &Path) {}
