//! Error types for ax with POSIX-style exit codes:
//!
//! - **Not found** (`ENOENT`, 2): no workspace, missing prerequisite
//! - **Already exists** (`EEXIST`, 17): idempotency guards on init and setup
//! - **Invalid argument** (`EINVAL`, 22): unknown option, unknown command
//!
//! Everything else (IO, a command dying without an exit code) exits with 1.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes reused from the POSIX errno table.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    /// `ENOENT`
    pub const NOT_FOUND: i32 = 2;
    /// `EEXIST`
    pub const ALREADY_EXISTS: i32 = 17;
    /// `EINVAL`
    pub const INVALID_ARGUMENT: i32 = 22;
}

/// Core error type for ax operations
#[derive(Debug, Error)]
pub enum Error {
    /// No marker directory between the start directory and the filesystem root
    #[error("not inside a workspace (no .ax directory found from {})", start.display())]
    NotAWorkspace { start: PathBuf },

    /// Workspace found but no visible script carries that name
    #[error("unrecognized command '{0}'")]
    UnknownCommand(String),

    /// Leading argument looks like an option but is not one
    #[error("unrecognized option '{0}'")]
    UnrecognizedOption(String),

    /// Something the operation depends on is absent (init file, executable)
    #[error("{0}")]
    MissingPrerequisite(String),

    /// `--init` in a directory that already has a marker
    #[error("already initialized: {} exists", .0.display())]
    AlreadyInitialized(PathBuf),

    /// `--setup` when the completion hook is already registered
    #[error("already set up: completion hook present in {}", .0.display())]
    AlreadySetup(PathBuf),

    /// The command process ended without an exit code
    #[error("command '{name}' failed: {reason}")]
    CommandFailure { name: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the process exit code for this error.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotAWorkspace { .. } | Self::MissingPrerequisite(_) => exit_code::NOT_FOUND,
            Self::AlreadyInitialized(_) | Self::AlreadySetup(_) => exit_code::ALREADY_EXISTS,
            Self::UnknownCommand(_) | Self::UnrecognizedOption(_) => exit_code::INVALID_ARGUMENT,
            Self::CommandFailure { .. } | Self::Io(_) => exit_code::FAILURE,
        }
    }
}

/// Result type alias for ax-core operations
pub type Result<T> = std::result::Result<T, Error>;
