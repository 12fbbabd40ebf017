//! Ownership: query and change owner/group.

use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;

use crate::errors::{FolderError, Result};
use crate::options::RecurseOptions;
use crate::platform;

use super::suppress::suppress;

/// Symbolic name of the directory's owner. An id with no entry in the user
/// database is rendered as its decimal form.
///
/// Fails with [`FolderError::NotFound`] when `directory` does not exist.
pub fn owner(directory: impl AsRef<Path>) -> Result<String> {
    let directory = directory.as_ref();
    if !super::exists(directory) {
        return Err(FolderError::not_found(directory));
    }
    let meta = fs::metadata(directory).map_err(|_| FolderError::not_found(directory))?;
    Ok(platform::user_name_or_id(meta.uid()))
}

/// Symbolic name of the group the directory belongs to; unmapped ids are
/// rendered as their decimal form.
///
/// Fails with [`FolderError::NotFound`] when `directory` does not exist.
pub fn group(directory: impl AsRef<Path>) -> Result<String> {
    let directory = directory.as_ref();
    if !super::exists(directory) {
        return Err(FolderError::not_found(directory));
    }
    let meta = fs::metadata(directory).map_err(|_| FolderError::not_found(directory))?;
    Ok(platform::group_name_or_id(meta.gid()))
}

/// Change the owner of a directory to the named user.
///
/// The name is resolved through the user database once per call; an unknown
/// user is a suppressed failure (`Ok(false)`). With `recursive`, ownership
/// is applied children before self with per-entry failures suppressed.
///
/// Fails with [`FolderError::NotFound`] when `directory` does not exist.
pub fn chown(directory: impl AsRef<Path>, user: &str, options: RecurseOptions) -> Result<bool> {
    let directory = directory.as_ref();
    if !super::exists(directory) {
        return Err(FolderError::not_found(directory));
    }

    let Some(uid) = platform::uid_for_name(user) else {
        warn!(user, path = %directory.display(), "unknown user; owner unchanged");
        return Ok(false);
    };

    if options.recursive {
        for child in WalkDir::new(directory)
            .min_depth(1)
            .contents_first(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            suppress(
                "change owner",
                child.path(),
                platform::chown_path(child.path(), uid),
            );
        }
    }

    Ok(suppress(
        "change owner",
        directory,
        platform::chown_path(directory, uid),
    ))
}

/// Change the group a directory belongs to.
///
/// Same resolution and suppression policy as [`chown`].
pub fn chgrp(directory: impl AsRef<Path>, group: &str, options: RecurseOptions) -> Result<bool> {
    let directory = directory.as_ref();
    if !super::exists(directory) {
        return Err(FolderError::not_found(directory));
    }

    let Some(gid) = platform::gid_for_name(group) else {
        warn!(group, path = %directory.display(), "unknown group; group unchanged");
        return Ok(false);
    };

    if options.recursive {
        for child in WalkDir::new(directory)
            .min_depth(1)
            .contents_first(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            suppress(
                "change group",
                child.path(),
                platform::chgrp_path(child.path(), gid),
            );
        }
    }

    Ok(suppress(
        "change group",
        directory,
        platform::chgrp_path(directory, gid),
    ))
}
