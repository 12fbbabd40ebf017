//! Destination name resolution for rename/move/copy.
//!
//! A destination with no path separator is a bare name and resolves as a
//! sibling under the source's parent; anything else (absolute or explicit
//! relative) is used as-is.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

pub(crate) fn resolve_destination(source: &Path, destination: &Path) -> PathBuf {
    if is_bare_name(destination) {
        match source.parent() {
            Some(parent) => parent.join(destination),
            None => destination.to_path_buf(),
        }
    } else {
        destination.to_path_buf()
    }
}

fn is_bare_name(destination: &Path) -> bool {
    !destination
        .as_os_str()
        .to_string_lossy()
        .contains(MAIN_SEPARATOR)
}
