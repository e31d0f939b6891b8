//! The capability set a command exposes to the dispatcher.
//!
//! All four capabilities are optional on the command side: an
//! implementation reports "not defined" as `Ok(None)`, `Ok(())`, an empty
//! list or exit code 0 respectively.

use std::{ffi::OsString, path::Path};

use crate::{workspace::InvocationContext, Result};

/// Description used when a command has no usable `info`.
pub const FALLBACK_INFO: &str = "A custom command.";

pub trait CommandContract {
    /// One-line description, `None` when the command does not provide one.
    fn info(&self) -> Result<Option<String>>;

    /// Print the full help text.
    fn help(&self) -> Result<()>;

    /// Completion candidates for the given trailing arguments.
    fn list(&self, args: &[String]) -> Result<Vec<String>>;

    /// Run the command and return its exit code. Arguments are passed on
    /// as given, whatever their encoding.
    fn main(&self, args: &[OsString]) -> Result<i32>;
}

/// Turns a script on disk into something satisfying [`CommandContract`].
pub trait Loader {
    type Command: CommandContract;

    fn load(&self, script: &Path, context: InvocationContext) -> Self::Command;
}

/// The description shown for a command, falling back when `info` is absent,
/// blank or fails.
pub fn describe(command: &impl CommandContract) -> String {
    match command.info() {
        Ok(Some(line)) if !line.trim().is_empty() => line.trim().to_string(),
        Ok(_) => FALLBACK_INFO.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "info probe failed");
            FALLBACK_INFO.to_string()
        }
    }
}
