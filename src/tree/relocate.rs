//! Directory relocation.
//!
//! `rename` and `move_dir` are the same operation under two names; both
//! resolve a bare destination name as a sibling of the source.

use std::fs;
use std::path::Path;

use crate::errors::{FolderError, Result};

use super::resolve::resolve_destination;
use super::suppress::suppress;

/// Rename a directory. A `to` with no path separator stays within the
/// source's parent directory.
///
/// Fails with [`FolderError::NotFound`] when `directory` does not exist;
/// the underlying rename error collapses into `Ok(false)`.
pub fn rename(directory: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<bool> {
    relocate(directory.as_ref(), to.as_ref())
}

/// Move a directory. Functionally identical to [`rename`].
pub fn move_dir(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<bool> {
    relocate(source.as_ref(), destination.as_ref())
}

fn relocate(source: &Path, destination: &Path) -> Result<bool> {
    if !super::exists(source) {
        return Err(FolderError::not_found(source));
    }
    let target = resolve_destination(source, destination);
    Ok(suppress(
        "rename directory",
        source,
        fs::rename(source, &target),
    ))
}
