//! Error types for CLI commands
//!
//! This module defines structured error types using thiserror. The core
//! taxonomy stays intact through the transparent variant so the messages for
//! configuration, VCS and I/O failures remain distinct at the surface.

use gouzi_core::HookKind;
use thiserror::Error;

/// Errors that can occur during command execution
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CommandError {
    /// Core configuration, VCS or filesystem error
    #[error(transparent)]
    Core(#[from] gouzi_core::Error),

    /// A kind was requested that the manifest does not declare
    #[error("Hook '{kind}' is not declared in {manifest}")]
    NotDeclared {
        /// The requested hook kind
        kind: HookKind,
        /// The manifest that was consulted
        manifest: String,
    },

    /// The manifest declares no hooks at all
    #[error("Manifest {manifest} declares no hooks")]
    EmptyManifest {
        /// The manifest that was consulted
        manifest: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;
