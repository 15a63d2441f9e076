//! The closed set of supported git hook kinds
//!
//! Each kind maps 1:1 to the canonical file name git looks up inside
//! `.git/hooks`. "No kind selected" is modeled as `Option<HookKind>` at the
//! configuration layer, not as a sentinel member here.

use serde::{Deserialize, Serialize};

/// A supported git hook lifecycle point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HookKind {
    /// Runs before a commit is created
    PreCommit,
    /// Runs before the commit message editor is shown
    PrepareCommitMsg,
    /// Runs after the commit message is entered, before the commit is finalized
    CommitMsg,
    /// Runs after a commit is made
    PostCommit,
    /// Runs before remote references are updated during a push
    PrePush,
}

impl HookKind {
    /// Every supported kind, in canonical order
    pub const ALL: [HookKind; 5] = [
        HookKind::PreCommit,
        HookKind::PrepareCommitMsg,
        HookKind::CommitMsg,
        HookKind::PostCommit,
        HookKind::PrePush,
    ];

    /// Canonical on-disk file name for this hook
    pub fn file_name(self) -> &'static str {
        match self {
            HookKind::PreCommit => "pre-commit",
            HookKind::PrepareCommitMsg => "prepare-commit-msg",
            HookKind::CommitMsg => "commit-msg",
            HookKind::PostCommit => "post-commit",
            HookKind::PrePush => "pre-push",
        }
    }

    /// Resolve a canonical name to a kind
    ///
    /// Unknown names return `None`, not an error; the caller decides how to
    /// react (the manifest loader turns it into `Error::UnknownHookKind`).
    pub fn resolve(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.file_name() == name)
    }

    /// Comma-separated list of all canonical names, for error messages
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.file_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for HookKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}
