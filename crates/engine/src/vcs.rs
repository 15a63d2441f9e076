//! VCS root discovery
//!
//! Walks up from a starting directory until it finds one containing a
//! directory entry literally named `.git`. A `.git` regular file (worktree
//! pointer) does not count; the metadata entry must itself be a directory.

use gouzi_core::path::AbsPath;
use std::path::{Path, PathBuf};

/// The git metadata directory name that marks a repository root
pub const GIT_DIR: &str = ".git";

/// A located repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcsRoot {
    /// The working tree root, the directory containing `.git`
    pub work_dir: AbsPath,
    /// The `.git` metadata directory itself
    pub git_dir: PathBuf,
}

impl VcsRoot {
    /// The hooks directory inside the metadata directory
    ///
    /// The directory is not guaranteed to exist; freshly initialized
    /// repositories have it, but the installer still creates it on demand.
    pub fn hooks_dir(&self) -> PathBuf {
        self.git_dir.join("hooks")
    }
}

/// Ascend from `start` looking for the repository root
///
/// Returns `None` when the filesystem root is reached without finding a
/// `.git` directory. Relative starting paths are resolved against the
/// current working directory first.
pub fn find_vcs_root(start: &Path) -> Option<VcsRoot> {
    let start = if start.is_absolute() {
        start.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(start)
    };

    let mut current = start.as_path();
    loop {
        let candidate = current.join(GIT_DIR);
        if candidate.is_dir() {
            let work_dir = AbsPath::from_path(current).ok()?;
            return Some(VcsRoot {
                work_dir,
                git_dir: candidate,
            });
        }
        current = current.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_root_in_start_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let root = find_vcs_root(dir.path()).unwrap();
        assert_eq!(root.work_dir.as_path(), dir.path());
        assert_eq!(root.git_dir, dir.path().join(".git"));
        assert_eq!(root.hooks_dir(), dir.path().join(".git/hooks"));
    }

    #[test]
    fn ascends_to_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let nested = dir.path().join("src/deep/module");
        fs::create_dir_all(&nested).unwrap();

        let root = find_vcs_root(&nested).unwrap();
        assert_eq!(root.work_dir.as_path(), dir.path());
    }

    #[test]
    fn none_without_metadata_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_vcs_root(dir.path()), None);
    }

    #[test]
    fn git_file_does_not_mark_a_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".git"), "gitdir: /elsewhere").unwrap();
        assert_eq!(find_vcs_root(dir.path()), None);
    }
}
