//! CLI utilities and helpers

pub mod args;
pub mod error;
pub mod setup;

pub use args::{build_cli, parse_invocation, Invocation};
pub use error::{format_error, get_exit_code};
