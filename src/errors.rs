//! Typed error definitions for folder_ops.
//!
//! Directory operations surface exactly one error: the primary target of the
//! call does not exist. Every other OS-level failure during a call is
//! best-effort suppressed and reflected in the boolean outcome instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolderError {
    #[error("{} could not be found", .0.display())]
    NotFound(PathBuf),
}

impl FolderError {
    pub(crate) fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound(path.into())
    }
}

pub type Result<T> = std::result::Result<T, FolderError>;
