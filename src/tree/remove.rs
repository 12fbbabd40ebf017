//! Directory deletion.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::errors::{FolderError, Result};
use crate::options::RecurseOptions;

use super::suppress::suppress;

/// Delete a directory.
///
/// Non-recursive deletion succeeds only on an empty directory; a populated
/// one yields `Ok(false)` and is left intact. Recursive deletion removes
/// children before the directory itself, best-effort: per-child failures
/// are suppressed and only the final removal of the root decides the
/// returned boolean.
///
/// Fails with [`FolderError::NotFound`] when `directory` does not exist.
pub fn delete(directory: impl AsRef<Path>, options: RecurseOptions) -> Result<bool> {
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
            if child.file_type().is_dir() {
                suppress("remove directory", child.path(), fs::remove_dir(child.path()));
            } else {
                suppress("remove file", child.path(), fs::remove_file(child.path()));
            }
        }
    }

    Ok(suppress(
        "remove directory",
        directory,
        fs::remove_dir(directory),
    ))
}
