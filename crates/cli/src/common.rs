//! Common state shared across CLI commands

use std::path::{Path, PathBuf};

/// Runtime context passed to every command
///
/// Holds the project directory the VCS search starts from and the manifest
/// location, both already resolved from flags and defaults.
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    project_dir: PathBuf,
    manifest_path: PathBuf,
}

impl RuntimeContext {
    /// Build a context from the resolved project directory and manifest path
    pub fn new(project_dir: PathBuf, manifest_path: PathBuf) -> Self {
        Self {
            project_dir,
            manifest_path,
        }
    }

    /// Directory the VCS root search starts from
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Path of the hook manifest
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }
}
