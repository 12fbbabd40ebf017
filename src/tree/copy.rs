//! Directory copying.
//!
//! Recursive copies run in two passes over the source walk: the directory
//! skeleton first, then file bytes, so every file copy finds its parent in
//! place. Per-entry failures are suppressed; the returned boolean reports
//! only whether the destination directory exists afterwards, which is the
//! deliberate (if coarse) success criterion of this operation.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::errors::{FolderError, Result};
use crate::options::CopyOptions;

use super::resolve::resolve_destination;
use super::suppress::suppress;

/// Copy a directory. A bare destination name resolves as a sibling of the
/// source. Without `recursive`, only top-level files are copied and
/// subdirectories are skipped entirely.
///
/// Fails with [`FolderError::NotFound`] when `source` does not exist.
pub fn copy(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    options: CopyOptions,
) -> Result<bool> {
    let source = source.as_ref();
    if !super::exists(source) {
        return Err(FolderError::not_found(source));
    }

    let target = resolve_destination(source, destination.as_ref());
    suppress("create directory", &target, fs::create_dir(&target));

    if options.recursive {
        // Pass 1: directory skeleton.
        for dir in WalkDir::new(source)
            .min_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir())
        {
            if let Ok(rel) = dir.path().strip_prefix(source) {
                let new_dir = target.join(rel);
                suppress("create directory", &new_dir, fs::create_dir_all(&new_dir));
            }
        }

        // Pass 2: file bytes.
        for file in WalkDir::new(source)
            .min_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| !e.file_type().is_dir())
        {
            if let Ok(rel) = file.path().strip_prefix(source) {
                let dst = target.join(rel);
                suppress("copy file", &dst, fs::copy(file.path(), &dst));
            }
        }
    } else {
        for file in WalkDir::new(source)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| !e.file_type().is_dir())
        {
            let dst = target.join(file.file_name());
            suppress("copy file", &dst, fs::copy(file.path(), &dst));
        }
    }

    Ok(super::exists(&target))
}
