//! Permission bits: query and change.

use std::fs::{self, Permissions};
use std::os::unix::fs::{MetadataExt, PermissionsExt};
use std::path::Path;

use walkdir::WalkDir;

use crate::errors::{FolderError, Result};
use crate::options::RecurseOptions;

use super::suppress::suppress;

/// Last four octal digits of the directory's permission bits, as a string
/// (e.g. `"0775"`).
///
/// Fails with [`FolderError::NotFound`] when `directory` does not exist.
pub fn mode(directory: impl AsRef<Path>) -> Result<String> {
    let directory = directory.as_ref();
    if !super::exists(directory) {
        return Err(FolderError::not_found(directory));
    }
    // The directory can vanish between the check and the stat; treat that
    // the same as an absent target.
    let meta = fs::metadata(directory).map_err(|_| FolderError::not_found(directory))?;
    Ok(format_mode(meta.mode()))
}

/// Alias for [`mode`].
pub fn perms(directory: impl AsRef<Path>) -> Result<String> {
    mode(directory)
}

/// Set permission bits on a directory.
///
/// With `recursive`, the mode is applied to every child (files and
/// directories alike, leaf-deep, children before self) before the directory
/// itself; per-entry failures are suppressed and only the final
/// self-application decides the returned boolean.
///
/// Fails with [`FolderError::NotFound`] when `directory` does not exist.
pub fn chmod(directory: impl AsRef<Path>, mode: u32, options: RecurseOptions) -> Result<bool> {
    let directory = directory.as_ref();
    if !super::exists(directory) {
        return Err(FolderError::not_found(directory));
    }

    if options.recursive {
        for child in WalkDir::new(directory)
            .min_depth(1)
            .contents_first(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            suppress(
                "change mode",
                child.path(),
                fs::set_permissions(child.path(), Permissions::from_mode(mode)),
            );
        }
    }

    Ok(suppress(
        "change mode",
        directory,
        fs::set_permissions(directory, Permissions::from_mode(mode)),
    ))
}

fn format_mode(st_mode: u32) -> String {
    let octal = format!("{:o}", st_mode);
    octal[octal.len().saturating_sub(4)..].to_string()
}
