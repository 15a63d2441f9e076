//! Install command
//!
//! Installs one hook built from flags, or every hook declared in the
//! manifest when no flags carry content.

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::{CommandError, Result};
use clap::Args;
use gouzi_config::{HookConfig, Interpreter, Manifest};
use gouzi_core::{Error, HookKind};
use gouzi_engine::install::{Installed, install};
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// Install git hooks from the manifest or from flags
#[derive(Debug, Args)]
pub struct InstallCommand {
    /// Hook kind to install (e.g. pre-commit); omit to install every
    /// manifest hook
    pub kind: Option<String>,

    /// Command that runs before the main command
    #[arg(long, value_name = "CMD")]
    pub before: Option<String>,

    /// The main hook command
    #[arg(long, value_name = "CMD")]
    pub run: Option<String>,

    /// Command that runs after the main command
    #[arg(long, value_name = "CMD")]
    pub after: Option<String>,

    /// Interpreter for the shebang line (sh, bash or pwsh)
    #[arg(long, value_name = "NAME")]
    pub interpreter: Option<Interpreter>,

    /// External script used verbatim as the hook body
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl InstallCommand {
    fn has_content_flags(&self) -> bool {
        self.before.is_some() || self.run.is_some() || self.after.is_some() || self.file.is_some()
    }

    /// Resolve the positional kind argument
    fn resolve_kind(&self) -> Result<Option<HookKind>> {
        match &self.kind {
            None => Ok(None),
            Some(name) => HookKind::resolve(name)
                .map(Some)
                .ok_or_else(|| Error::UnknownHookKind { name: name.clone() }.into()),
        }
    }

    /// Build the configurations to install
    fn configs(&self, context: &RuntimeContext) -> Result<Vec<HookConfig>> {
        let kind = self.resolve_kind()?;

        if self.has_content_flags() {
            // Content from flags needs an explicit kind; require_kind
            // surfaces the configuration error before any filesystem effect.
            let mut builder = HookConfig::builder();
            if let Some(kind) = kind {
                builder = builder.kind(kind);
            }
            if let Some(before) = &self.before {
                builder = builder.before(before.clone());
            }
            if let Some(run) = &self.run {
                builder = builder.main(run.clone());
            }
            if let Some(after) = &self.after {
                builder = builder.after(after.clone());
            }
            if let Some(interpreter) = self.interpreter {
                builder = builder.interpreter(interpreter);
            }
            if let Some(file) = &self.file {
                builder = builder.source_file(file.clone());
            }
            let config = builder.build();
            config.require_kind()?;
            return Ok(vec![config]);
        }

        let manifest_path = context.manifest_path();
        let manifest = Manifest::load(manifest_path)?;
        let manifest_name = manifest_path.display().to_string();

        if manifest.is_empty() {
            return Err(CommandError::EmptyManifest {
                manifest: manifest_name,
            });
        }

        match kind {
            None => Ok(manifest.configs()),
            Some(kind) => {
                let config = manifest.config(kind).ok_or(CommandError::NotDeclared {
                    kind,
                    manifest: manifest_name,
                })?;
                Ok(vec![config])
            }
        }
    }
}

impl Command for InstallCommand {
    type Output = Vec<Installed>;

    fn execute(&self, context: &RuntimeContext) -> Result<Self::Output> {
        let configs = self.configs(context)?;

        let mut results = Vec::with_capacity(configs.len());
        for config in &configs {
            let installed = install(config, context.project_dir())?;
            println!(
                "{} {} {} {}",
                "Installed".green(),
                installed.kind.to_string().bright_cyan(),
                "at".dimmed(),
                installed.path.display()
            );
            results.push(installed);
        }
        Ok(results)
    }
}
