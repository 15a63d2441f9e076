//! Stateless filesystem primitives
//!
//! Every operation takes an explicit target path and returns a result; there
//! is no "current file" carried between calls. I/O failures always propagate
//! as the matching error variant, never logged and swallowed.

use gouzi_core::{Error, Result};
use std::fs;
use std::path::Path;

/// Write `content` to `path`, creating parent directories as needed
///
/// An existing file is truncated.
pub fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(path, content).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Copy `src`'s bytes verbatim to `dst`, creating parent directories
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    let content = fs::read(src).map_err(|e| Error::FileRead {
        path: src.to_path_buf(),
        source: e,
    })?;
    write_file(dst, &content)
}

/// Remove a file
///
/// Fails when the file does not exist; callers that want idempotent removal
/// check for existence first.
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| Error::FileRemove {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Set the executable permission bits on a file
///
/// On non-unix platforms this is a no-op; git hooks there are dispatched
/// without an execute bit.
pub fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata = fs::metadata(path).map_err(|e| Error::Permissions {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(permissions.mode() | 0o755);
        fs::set_permissions(path, permissions).map_err(|e| Error::Permissions {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    #[cfg(not(unix))]
    {
        let _ = path;
    }
    Ok(())
}

/// List the file names in a directory, lexicographically sorted
///
/// Directories and unreadable entries are skipped; there is no extension
/// filter since hook scripts conventionally carry none.
pub fn read_dir_sorted(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::FileRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut names: Vec<String> = entries
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    Ok(names)
}
