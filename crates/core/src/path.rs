//! Type-safe path types
//!
//! [`AbsPath`] is a newtype over `PathBuf` that guarantees the path is
//! absolute at construction time. The repository locator produces one for
//! the working tree root so downstream code never has to re-check.
//!
//! # Examples
//!
//! ```
//! use gouzi_core::path::AbsPath;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let root = AbsPath::new("/home/user/project".into())?;
//! assert_eq!(root.as_path().to_str().unwrap(), "/home/user/project");
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// An absolute path on the filesystem
///
/// This type guarantees that the path is absolute (starts with `/` on Unix or
/// a drive letter on Windows).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbsPath(PathBuf);

impl AbsPath {
    /// Create a new `AbsPath` from a `PathBuf`
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not absolute.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.is_absolute() {
            Ok(AbsPath(path))
        } else {
            Err(Error::PathNotAbsolute { path })
        }
    }

    /// Create a new `AbsPath` from a reference to a `Path`
    ///
    /// This will clone the path internally.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not absolute.
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::new(path.to_path_buf())
    }

    /// Get the underlying `Path`
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}
