//! Hook removal
//!
//! Removal needs only a hook kind; it queries the filesystem directly and is
//! idempotent with respect to file presence. A missing VCS root is still an
//! error, matching install.

use crate::fs;
use crate::vcs::find_vcs_root;
use gouzi_core::{Error, HookKind, Result};
use std::path::{Path, PathBuf};

/// Outcome of a remove operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removed {
    /// The hook file path, whether or not it existed
    pub path: PathBuf,
    /// Whether a file was actually deleted
    pub existed: bool,
}

/// Remove an installed hook of the given kind
///
/// Deleting a hook that was never installed is a successful no-op.
///
/// # Errors
///
/// Returns `Error::VcsNotFound` when no repository exists above `start_dir`
/// (nothing is deleted), and an I/O variant when the deletion itself fails.
pub fn remove(kind: HookKind, start_dir: &Path) -> Result<Removed> {
    let root = find_vcs_root(start_dir).ok_or_else(|| Error::VcsNotFound {
        start: start_dir.to_path_buf(),
    })?;

    let target = root.hooks_dir().join(kind.file_name());
    if target.exists() {
        fs::remove_file(&target)?;
        tracing::info!("Removed {} hook at {}", kind, target.display());
        Ok(Removed {
            path: target,
            existed: true,
        })
    } else {
        tracing::debug!("No {} hook installed at {}", kind, target.display());
        Ok(Removed {
            path: target,
            existed: false,
        })
    }
}
