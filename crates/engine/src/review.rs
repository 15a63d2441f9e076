//! Hook review
//!
//! A pure observer: reports VCS presence, the hooks directory location and
//! the currently installed hook files. VCS absence is a reported condition
//! here, never an error, since reporting it is the whole point.

use crate::fs;
use crate::vcs::find_vcs_root;
use gouzi_core::Result;
use std::path::{Path, PathBuf};

/// What `review` found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewReport {
    /// Whether a VCS root was found above the start directory
    pub vcs_present: bool,
    /// The hooks directory, when a VCS root exists
    pub hooks_dir: Option<PathBuf>,
    /// Installed hook file names, lexicographically sorted
    pub installed: Vec<String>,
}

/// Inspect the repository's hook state
///
/// With no VCS root the report carries `vcs_present=false`, no hooks
/// directory and an empty listing. A present VCS root whose hooks directory
/// does not exist yet also yields an empty listing.
///
/// # Errors
///
/// Only an unreadable existing hooks directory surfaces as an error.
pub fn review(start_dir: &Path) -> Result<ReviewReport> {
    let Some(root) = find_vcs_root(start_dir) else {
        tracing::debug!("No VCS root above {}", start_dir.display());
        return Ok(ReviewReport {
            vcs_present: false,
            hooks_dir: None,
            installed: Vec::new(),
        });
    };

    let hooks_dir = root.hooks_dir();
    let installed = if hooks_dir.is_dir() {
        fs::read_dir_sorted(&hooks_dir)?
    } else {
        Vec::new()
    };

    Ok(ReviewReport {
        vcs_present: true,
        hooks_dir: Some(hooks_dir),
        installed,
    })
}
