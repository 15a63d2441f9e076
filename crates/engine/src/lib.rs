//! Filesystem engine for gouzi
//!
//! This crate materializes hook configurations as executable files in the
//! repository's `.git/hooks` directory, and provides the matching remove and
//! review operations. Everything is synchronous, blocking I/O; callers are
//! responsible for serializing operations on the same hook kind.

pub mod fs;
pub mod install;
pub mod remove;
pub mod review;
pub mod vcs;

pub use gouzi_core::{Error, Result};
pub use install::{Installed, install};
pub use remove::{Removed, remove};
pub use review::{ReviewReport, review};
pub use vcs::{VcsRoot, find_vcs_root};
