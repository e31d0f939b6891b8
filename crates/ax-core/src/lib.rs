//! # Ax Core
//!
//! Workspace resolution, command registry, the command contract and the
//! completion engine behind the `ax` command runner.
//!
//! A workspace is any directory holding a `.ax` marker directory. Each
//! visible `<name>.sh` script in the marker is a command that may define
//! `info`, `help`, `list` and `main`.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]

pub mod completion;
pub mod config;
pub mod contract;
mod error;
pub mod options;
pub mod registry;
pub mod script;
pub mod workspace;

pub use completion::complete;
pub use config::Settings;
pub use contract::{CommandContract, Loader, FALLBACK_INFO};
pub use error::{exit_code, Error, Result};
pub use options::TopLevelOption;
pub use registry::CommandSummary;
pub use script::{ScriptCommand, ShellLoader};
pub use workspace::{resolve, InvocationContext, Resolution, Workspace};
