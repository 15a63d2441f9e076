//! Remove command

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;
use clap::Args;
use gouzi_core::{Error, HookKind};
use gouzi_engine::remove::{Removed, remove};
use owo_colors::OwoColorize;

/// Remove an installed git hook
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Hook kind to remove (e.g. pre-commit)
    pub kind: String,
}

impl Command for RemoveCommand {
    type Output = Removed;

    fn execute(&self, context: &RuntimeContext) -> Result<Self::Output> {
        let kind = HookKind::resolve(&self.kind).ok_or_else(|| Error::UnknownHookKind {
            name: self.kind.clone(),
        })?;

        let removed = remove(kind, context.project_dir())?;
        if removed.existed {
            println!(
                "{} {} {}",
                "Removed".green(),
                kind.to_string().bright_cyan(),
                "hook".dimmed()
            );
        } else {
            println!(
                "{} {} {}",
                "No".yellow(),
                kind.to_string().bright_cyan(),
                "hook installed, nothing to remove".dimmed()
            );
        }
        Ok(removed)
    }
}
