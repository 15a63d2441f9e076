//! Declarative hook configuration for gouzi
//!
//! This crate holds the in-memory model of a git hook: what kind it is,
//! which command fragments or external file provide its body, and which
//! interpreter runs it. It also decides, per configuration, whether the
//! inline fragments or the external file are the source of truth, and
//! composes the final script text for the inline case.
//!
//! Nothing here touches the hooks directory; materializing a configuration
//! is the engine crate's job.

pub mod compose;
pub mod hook;
pub mod interpreter;
pub mod manifest;
pub mod resolve;

pub use compose::compose;
pub use gouzi_core::{Error, Result};
pub use hook::{HookConfig, HookConfigBuilder};
pub use interpreter::Interpreter;
pub use manifest::Manifest;
pub use resolve::{SourceOfTruth, classify};
