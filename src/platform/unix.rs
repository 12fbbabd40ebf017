//! Unix implementations of platform helpers: scoped umask, identity
//! database lookups and ownership changes.

use std::io;
use std::path::Path;

use nix::sys::stat::{Mode, umask};
use nix::unistd::{self, Gid, Group, Uid, User};

/// Clears the process umask on construction and restores the saved value on
/// drop, so `mkdir` mode bits land exactly as requested on every exit path,
/// including panics and early returns.
///
/// The umask is process-global; callers hold the guard only for the duration
/// of a single create call.
pub(crate) struct UmaskGuard {
    saved: Mode,
}

impl UmaskGuard {
    pub(crate) fn clear() -> Self {
        Self {
            saved: umask(Mode::empty()),
        }
    }
}

impl Drop for UmaskGuard {
    fn drop(&mut self) {
        umask(self.saved);
    }
}

/// Resolve a numeric uid to its symbolic name, falling back to the decimal
/// id when the user database has no mapping.
pub(crate) fn user_name_or_id(uid: u32) -> String {
    match User::from_uid(Uid::from_raw(uid)) {
        Ok(Some(user)) => user.name,
        _ => uid.to_string(),
    }
}

/// Resolve a numeric gid to its symbolic name, falling back to the decimal
/// id when the group database has no mapping.
pub(crate) fn group_name_or_id(gid: u32) -> String {
    match Group::from_gid(Gid::from_raw(gid)) {
        Ok(Some(group)) => group.name,
        _ => gid.to_string(),
    }
}

pub(crate) fn uid_for_name(name: &str) -> Option<Uid> {
    User::from_name(name).ok().flatten().map(|u| u.uid)
}

pub(crate) fn gid_for_name(name: &str) -> Option<Gid> {
    Group::from_name(name).ok().flatten().map(|g| g.gid)
}

/// Change the owner of `path`, leaving the group untouched.
pub(crate) fn chown_path(path: &Path, uid: Uid) -> io::Result<()> {
    unistd::chown(path, Some(uid), None).map_err(io::Error::from)
}

/// Change the group of `path`, leaving the owner untouched.
pub(crate) fn chgrp_path(path: &Path, gid: Gid) -> io::Result<()> {
    unistd::chown(path, None, Some(gid)).map_err(io::Error::from)
}
