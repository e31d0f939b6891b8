//! Global setup utilities for CLI initialization
//!
//! Provides setup routines for:
//! - Early flag parsing (the hidden `--complete` entry point)
//! - Logging initialization with tracing

use std::ffi::OsString;

use anyhow::Result;
use ax_core::config::LOG_VAR;
use tracing_subscriber::EnvFilter;

/// Flag that switches `ax` into completion mode. Not a user-facing option.
pub const COMPLETE_FLAG: &str = "--complete";

/// A completion request from the shell hook:
/// `ax --complete <cword> <words...>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub cword: usize,
    pub words: Vec<String>,
}

/// Check for the completion entry point before full argument parsing.
///
/// An unparsable cursor index yields a request that completes nothing.
/// Words that are not valid UTF-8 are completed lossily.
pub fn parse_early_flags(args: &[OsString]) -> Option<CompletionRequest> {
    let (flag, rest) = args.split_first()?;
    if flag != COMPLETE_FLAG {
        return None;
    }

    let (cword, words) = rest.split_first().map_or((0, &[][..]), |(cword, words)| {
        (cword.to_str().and_then(|c| c.parse().ok()).unwrap_or(0), words)
    });
    Some(CompletionRequest {
        cword,
        words: words
            .iter()
            .map(|w| w.to_string_lossy().into_owned())
            .collect(),
    })
}

/// Initialize tracing subscriber for logging
///
/// Filter directives come from `AX_LOG` (default `warn`). Output goes to
/// stderr so stdout stays clean for commands and completion candidates.
///
/// # Errors
/// Returns an error if the subscriber initialization fails
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}
