//! Best-effort handling of OS calls.
//!
//! Recursive operations continue past individual failures; the outcome of
//! each underlying call collapses into a boolean and the error itself is
//! logged with a platform-aware hint so partial failures remain diagnosable.

use std::io;
use std::path::Path;
use tracing::debug;

/// Collapse an OS call result into a boolean, logging the suppressed error.
pub(crate) fn suppress<T>(op: &str, path: &Path, result: io::Result<T>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "{} suppressed{}", op, hint(&e));
            false
        }
    }
}

/// Short actionable hint keyed off the raw OS error code.
fn hint(e: &io::Error) -> &'static str {
    #[cfg(unix)]
    if let Some(code) = e.raw_os_error() {
        return match code {
            libc::EACCES | libc::EPERM => " — permission denied; check ownership and mode bits",
            libc::ENOENT => " — path vanished; verify it still exists",
            libc::EEXIST => " — already exists",
            libc::ENOTEMPTY => " — directory not empty; a recursive call is required",
            libc::EXDEV => " — cross-filesystem; rename not possible",
            libc::EROFS => " — read-only filesystem",
            libc::ENOSPC => " — insufficient space on device",
            libc::ENAMETOOLONG => " — path too long",
            _ => "",
        };
    }

    match e.kind() {
        io::ErrorKind::PermissionDenied => " — permission denied; check ownership and mode bits",
        io::ErrorKind::NotFound => " — path vanished; verify it still exists",
        io::ErrorKind::AlreadyExists => " — already exists",
        _ => "",
    }
}
