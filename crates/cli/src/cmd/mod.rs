//! CLI subcommand implementations

pub mod install;
pub mod remove;
pub mod review;
