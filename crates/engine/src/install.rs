//! Hook installation
//!
//! Materializes a finished configuration as an executable file in the
//! repository's hooks directory. All configuration-level checks run before
//! the first filesystem write; an I/O failure after that point may leave a
//! partially-written, non-executable file, corrected by the next install or
//! remove. No locking; concurrent installs of the same kind race with
//! last-writer-wins.

use crate::fs;
use crate::vcs::find_vcs_root;
use gouzi_config::{HookConfig, SourceOfTruth, classify, compose};
use gouzi_core::{Error, HookKind, Result};
use std::path::{Path, PathBuf};

/// Outcome of a successful install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installed {
    /// The installed hook kind
    pub kind: HookKind,
    /// Where the hook file was written
    pub path: PathBuf,
    /// Which configured input provided the content
    pub source: SourceOfTruth,
}

/// Install a hook into the repository found from `start_dir`
///
/// Steps, in order:
/// 1. the configuration must name a kind (`Error::UnspecifiedHookKind`)
/// 2. a VCS root must exist above `start_dir` (`Error::VcsNotFound`; nothing
///    is written)
/// 3. the source of truth is classified (`Error::NoContentConfigured`)
/// 4. an existing hook file of the same kind is deleted first; installs
///    overwrite, they never merge
/// 5. inline content is composed and written with a trailing newline;
///    external content is copied byte-for-byte
/// 6. the file is made executable
///
/// # Errors
///
/// Configuration errors surface before any filesystem effect; write, copy
/// and permission failures surface as the matching I/O variant without
/// retry or rollback.
pub fn install(config: &HookConfig, start_dir: &Path) -> Result<Installed> {
    let kind = config.require_kind()?;

    let root = find_vcs_root(start_dir).ok_or_else(|| Error::VcsNotFound {
        start: start_dir.to_path_buf(),
    })?;

    let source = classify(config)?;

    let target = root.hooks_dir().join(kind.file_name());
    if target.exists() {
        tracing::debug!("Overwriting existing hook at {}", target.display());
        fs::remove_file(&target)?;
    }

    match source {
        SourceOfTruth::Inline => {
            let mut script = compose(config);
            script.push('\n');
            fs::write_file(&target, script.as_bytes())?;
        }
        SourceOfTruth::External => {
            // classify guarantees the reference is present here
            let external = config.source_file().ok_or(Error::NoContentConfigured)?;
            fs::copy_file(external, &target)?;
        }
    }

    fs::make_executable(&target)?;

    tracing::info!("Installed {} hook at {}", kind, target.display());
    Ok(Installed {
        kind,
        path: target,
        source,
    })
}
