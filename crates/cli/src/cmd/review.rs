//! Review command
//!
//! Reports VCS presence, the hooks directory location and the installed
//! hook files. VCS absence is a reported state, not a failure.

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;
use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use gouzi_core::HookKind;
use gouzi_engine::review::{ReviewReport, review};
use owo_colors::OwoColorize;

/// Show repository hook status
#[derive(Debug, Args)]
pub struct ReviewCommand {}

impl Command for ReviewCommand {
    type Output = ReviewReport;

    fn execute(&self, context: &RuntimeContext) -> Result<Self::Output> {
        let report = review(context.project_dir())?;

        if report.vcs_present {
            println!("{} {}", "Git repository:".bright_white(), "found".green());
        } else {
            println!(
                "{} {}",
                "Git repository:".bright_white(),
                "not found".red()
            );
            return Ok(report);
        }

        if let Some(hooks_dir) = &report.hooks_dir {
            println!(
                "{} {}",
                "Hooks directory:".bright_white(),
                hooks_dir.display()
            );
        }

        if report.installed.is_empty() {
            println!("\n{}", "No hooks installed".dimmed());
        } else {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_header(["Hook", "Managed kind"]);
            for name in &report.installed {
                let known = if HookKind::resolve(name).is_some() {
                    "yes"
                } else {
                    "no"
                };
                table.add_row([name.as_str(), known]);
            }
            println!("\n{table}");
        }

        Ok(report)
    }
}
