//! Hook configuration aggregate
//!
//! A [`HookConfig`] is built once through [`HookConfigBuilder`], consumed by
//! the installer, and never mutated afterward. The kind is optional until
//! finalization so an unfinished configuration can exist, but every
//! filesystem-facing operation goes through [`HookConfig::require_kind`]
//! first.

use crate::interpreter::Interpreter;
use gouzi_core::{Error, HookKind, Result};
use std::path::{Path, PathBuf};

/// Declarative description of one git hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    kind: Option<HookKind>,
    before: Option<String>,
    main: Option<String>,
    after: Option<String>,
    interpreter: Option<Interpreter>,
    source_file: Option<PathBuf>,
}

impl HookConfig {
    /// Start building a configuration
    pub fn builder() -> HookConfigBuilder {
        HookConfigBuilder::default()
    }

    /// The configured hook kind, if one was selected
    pub fn kind(&self) -> Option<HookKind> {
        self.kind
    }

    /// The configured kind, or `Error::UnspecifiedHookKind`
    ///
    /// This is the fail-fast gate every install path runs before touching
    /// the filesystem.
    pub fn require_kind(&self) -> Result<HookKind> {
        self.kind.ok_or(Error::UnspecifiedHookKind)
    }

    /// Command fragment that runs first
    pub fn before(&self) -> Option<&str> {
        self.before.as_deref()
    }

    /// The main command fragment
    pub fn main(&self) -> Option<&str> {
        self.main.as_deref()
    }

    /// Command fragment that runs last
    pub fn after(&self) -> Option<&str> {
        self.after.as_deref()
    }

    /// Interpreter directive for the shebang line
    pub fn interpreter(&self) -> Option<Interpreter> {
        self.interpreter
    }

    /// External file whose bytes are used verbatim as the hook body
    pub fn source_file(&self) -> Option<&Path> {
        self.source_file.as_deref()
    }

    /// Whether any inline fragment carries content
    ///
    /// Empty strings count as absent; a config whose fragments are all
    /// `Some("")` has no inline content.
    pub fn has_inline(&self) -> bool {
        [&self.before, &self.main, &self.after]
            .into_iter()
            .any(|slot| slot.as_deref().is_some_and(|s| !s.is_empty()))
    }
}

/// Builder producing one finished, fully-populated [`HookConfig`]
#[derive(Debug, Clone, Default)]
pub struct HookConfigBuilder {
    kind: Option<HookKind>,
    before: Option<String>,
    main: Option<String>,
    after: Option<String>,
    interpreter: Option<Interpreter>,
    source_file: Option<PathBuf>,
}

impl HookConfigBuilder {
    /// Select the hook kind
    #[must_use]
    pub fn kind(mut self, kind: HookKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the fragment that runs before the main command
    #[must_use]
    pub fn before(mut self, command: impl Into<String>) -> Self {
        self.before = Some(command.into());
        self
    }

    /// Set the main command fragment
    #[must_use]
    pub fn main(mut self, command: impl Into<String>) -> Self {
        self.main = Some(command.into());
        self
    }

    /// Set the fragment that runs after the main command
    #[must_use]
    pub fn after(mut self, command: impl Into<String>) -> Self {
        self.after = Some(command.into());
        self
    }

    /// Set the interpreter directive
    #[must_use]
    pub fn interpreter(mut self, interpreter: Interpreter) -> Self {
        self.interpreter = Some(interpreter);
        self
    }

    /// Reference an external file used verbatim as the hook body
    #[must_use]
    pub fn source_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_file = Some(path.into());
        self
    }

    /// Finish the configuration
    pub fn build(self) -> HookConfig {
        HookConfig {
            kind: self.kind,
            before: self.before,
            main: self.main,
            after: self.after,
            interpreter: self.interpreter,
            source_file: self.source_file,
        }
    }
}
