//! Core types and utilities for gouzi
//!
//! This is the foundation crate (Layer 0) that all other gouzi crates depend on.
//! It provides:
//! - The hook kind registry (`HookKind`)
//! - The absolute-path newtype (`AbsPath`)
//! - Base error types
//!
//! This crate has no dependencies on other gouzi crates.

pub mod error;
pub mod kind;
pub mod path;

pub use error::{Error, Result};
pub use kind::HookKind;
