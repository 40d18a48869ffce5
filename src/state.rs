//! In-place file replacement.
//!
//! The history file is rewritten by writing a sibling temp file and renaming
//! it over the target, so an interrupted or failed write leaves the original
//! file intact. A symlinked file is rewritten through the link.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{PlayFilterError, Result};

const TEMP_SUFFIX: &str = ".tmp";

/// Path of the temp file used while replacing `path`.
///
/// Lives in the same directory as `path` so the final rename never crosses
/// filesystems.
#[must_use]
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| path.as_os_str()));
    name.push(format!(".{}{TEMP_SUFFIX}", std::process::id()));
    path.with_file_name(name)
}

fn write_synced(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

/// The file a write to `path` lands on: the link target if `path` is a symlink.
///
/// # Errors
/// Returns `FileAccess` if `path` is a symlink that cannot be resolved.
pub fn resolve_write_target(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => {
            let target = fs::canonicalize(path).map_err(|source| PlayFilterError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(link = %path.display(), target = %target.display(), "writing through symlink");
            Ok(target)
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Replace the contents of `path` with `content` atomically.
///
/// 1. Resolve `path` through a symlink, if it is one
/// 2. Write and fsync a temp file next to the resolved file
/// 3. Copy the permissions of the existing file, if any
/// 4. Rename the temp file over the resolved file
///
/// The temp file is removed on failure.
///
/// # Errors
/// Returns `FileAccess` naming the path that could not be resolved, written or renamed.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let target = resolve_write_target(path)?;
    let temp_path = temp_path_for(&target);

    if let Err(source) = write_synced(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(PlayFilterError::FileAccess {
            path: temp_path,
            source,
        });
    }

    if let Ok(metadata) = fs::metadata(&target)
        && let Err(err) = fs::set_permissions(&temp_path, metadata.permissions())
    {
        warn!(
            path = %target.display(),
            error = %err,
            "could not copy permissions, rewritten file keeps default permissions"
        );
    }

    fs::rename(&temp_path, &target).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        PlayFilterError::FileAccess {
            path: target.clone(),
            source,
        }
    })
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
