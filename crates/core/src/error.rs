//! Base error types for gouzi
//!
//! This module provides the foundation error types that all crates can use.
//! Each failure condition the CLI has to message on is a distinct variant;
//! nothing is collapsed into a generic failure.

use std::path::PathBuf;
use thiserror::Error;

use crate::kind::HookKind;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// No hook kind was selected before the configuration was finalized
    #[error("No hook kind configured; select one of: {}", HookKind::supported_names())]
    UnspecifiedHookKind,

    /// Neither inline fragments nor an external source file were configured
    #[error("No hook content configured: set before/main/after commands or an external file")]
    NoContentConfigured,

    /// A hook name did not resolve to a supported kind
    #[error("Unknown hook kind '{name}'; supported kinds: {}", HookKind::supported_names())]
    UnknownHookKind { name: String },

    /// No VCS metadata directory found walking up from the start directory
    #[error("No git repository found (no `.git` directory above {})", start.display())]
    VcsNotFound { start: PathBuf },

    /// Failed to read a file
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to remove a file
    #[error("Failed to remove {}: {source}", path.display())]
    FileRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to change a file's permissions
    #[error("Failed to set permissions on {}: {source}", path.display())]
    Permissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest could not be read or parsed
    #[error("Invalid manifest {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },

    /// Path is not absolute
    #[error("Path must be absolute: {}", path.display())]
    PathNotAbsolute { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
