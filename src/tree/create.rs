//! Directory creation.

use std::fs;
use std::path::Path;

use crate::options::CreateOptions;

use super::suppress::suppress;

/// Create a directory, and intermediate directories when
/// `options.recursive`.
///
/// The requested mode is applied exactly: the process umask is cleared for
/// the duration of the call and restored on every exit path. OS failures
/// (target already exists, missing parent without `recursive`, permission
/// denied) collapse into `false`.
pub fn create(directory: impl AsRef<Path>, options: CreateOptions) -> bool {
    let directory = directory.as_ref();

    // `mkdir -p` reports success on an existing path; an existing target is
    // a failure under this contract, so check up front in recursive mode.
    if options.recursive && directory.exists() {
        return false;
    }

    #[cfg(unix)]
    let result = {
        use std::os::unix::fs::DirBuilderExt;
        let _umask = crate::platform::UmaskGuard::clear();
        fs::DirBuilder::new()
            .recursive(options.recursive)
            .mode(options.mode)
            .create(directory)
    };

    #[cfg(not(unix))]
    let result = fs::DirBuilder::new()
        .recursive(options.recursive)
        .create(directory);

    suppress("create directory", directory, result)
}
