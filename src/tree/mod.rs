//! Directory-tree operations: modularized.
//!
//! Each operation is a free function taking the directory path and a
//! per-call options record. A missing root is the only surfaced error; all
//! other OS failures during descent are logged and collapse into the
//! boolean outcome.

mod copy;
mod create;
mod list;
mod relocate;
mod remove;
mod resolve;
mod suppress;

#[cfg(unix)]
mod owner;
#[cfg(unix)]
mod perms;

pub use copy::copy;
pub use create::create;
pub use list::list;
pub use relocate::{move_dir, rename};
pub use remove::delete;

#[cfg(unix)]
pub use owner::{chgrp, chown, group, owner};
#[cfg(unix)]
pub use perms::{chmod, mode, perms};

use std::fs;
use std::path::Path;

/// True iff the path exists and is a directory.
pub fn exists(directory: impl AsRef<Path>) -> bool {
    fs::metadata(directory).map(|m| m.is_dir()).unwrap_or(false)
}
