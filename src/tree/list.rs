//! Directory listing.

use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::entry::{Entry, EntryKind};
use crate::errors::{FolderError, Result};
use crate::options::ListOptions;

use super::exists;

/// Enumerate the children of `directory` as [`Entry`] values.
///
/// Behavior:
/// - `.`/`..` never appear; enumeration follows the OS's native directory
///   order (callers must not assume it is sorted).
/// - With `recursive`, a subtree's entries appear before the subtree's own
///   entry, per child, in enumeration order.
/// - Directory entries are excluded unless `options.directories`, but are
///   still descended into when `recursive` is set.
/// - Children whose metadata cannot be read are skipped (logged).
///
/// Fails with [`FolderError::NotFound`] when `directory` does not exist.
pub fn list(directory: impl AsRef<Path>, options: ListOptions) -> Result<Vec<Entry>> {
    let directory = directory.as_ref();
    if !exists(directory) {
        return Err(FolderError::not_found(directory));
    }

    let mut walker = WalkDir::new(directory).min_depth(1).contents_first(true);
    if !options.recursive {
        walker = walker.max_depth(1);
    }

    let mut entries = Vec::new();
    for child in walker.into_iter().filter_map(|e| e.ok()) {
        let is_dir = child.file_type().is_dir();
        if is_dir && !options.directories {
            continue;
        }
        let meta = match child.metadata() {
            Ok(m) => m,
            Err(e) => {
                debug!(path = %child.path().display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let parent = child.path().parent().unwrap_or(directory);
        entries.push(Entry::from_parts(
            child.file_name(),
            parent,
            meta.len(),
            mtime_epoch(&meta),
            if is_dir {
                EntryKind::Directory
            } else {
                EntryKind::File
            },
        ));
    }

    Ok(entries)
}

#[cfg(unix)]
fn mtime_epoch(meta: &fs::Metadata) -> i64 {
    use std::os::unix::fs::MetadataExt;
    meta.mtime()
}

#[cfg(not(unix))]
fn mtime_epoch(meta: &fs::Metadata) -> i64 {
    meta.modified()
        .ok()
        .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
