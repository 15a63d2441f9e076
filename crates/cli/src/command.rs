//! Command trait for gouzi CLI
//!
//! All subcommands implement the `Command` trait, giving a uniform interface
//! for execution against a shared [`RuntimeContext`].

use crate::common::RuntimeContext;
use crate::error::Result;

/// Trait for all gouzi commands
///
/// Commands can specify their return type via the `Output` associated type;
/// most return `()` and print their own results.
pub trait Command {
    /// The type returned by this command
    type Output;

    /// Execute the command with the given runtime context
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` if the command fails; each failure condition
    /// maps to its own variant so the message at the surface stays specific.
    fn execute(&self, context: &RuntimeContext) -> Result<Self::Output>;
}
