//! Source-of-truth resolution
//!
//! A configuration can carry inline command fragments, an external file
//! reference, or both. Exactly one of them determines the installed hook's
//! content; this module makes that call.

use crate::hook::HookConfig;
use gouzi_core::{Error, Result};

/// Which configured input determines the hook's final content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOfTruth {
    /// Inline before/main/after fragments are composed into the script
    Inline,
    /// The external file's bytes are used verbatim
    External,
}

/// Classify a configuration's source of truth
///
/// Evaluated in order:
/// - neither inline content nor an external file: `Error::NoContentConfigured`
/// - inline only: `Inline`
/// - external only: `External`
/// - both: `Inline` wins and the discarded file reference is logged
///
/// # Errors
///
/// Returns `Error::NoContentConfigured` when the configuration carries no
/// content at all. Detected purely from in-memory state; never touches the
/// filesystem.
pub fn classify(config: &HookConfig) -> Result<SourceOfTruth> {
    match (config.has_inline(), config.source_file()) {
        (false, None) => Err(Error::NoContentConfigured),
        (true, None) => Ok(SourceOfTruth::Inline),
        (false, Some(_)) => Ok(SourceOfTruth::External),
        (true, Some(file)) => {
            tracing::warn!(
                "Both inline commands and an external file are configured; \
                 using inline commands and ignoring {}",
                file.display()
            );
            Ok(SourceOfTruth::Inline)
        }
    }
}
