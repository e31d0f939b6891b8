//! Hidden `--complete` entry point used by the shell hook

use std::io::{self, Write};

use ax_core::{complete, Loader};

use crate::cli::setup::CompletionRequest;

/// Print candidates for `request`, one per line. Never fails: a missing
/// working directory or a closed stdout just produces nothing.
pub fn run<L: Loader>(loader: &L, request: &CompletionRequest) {
    let Ok(cwd) = std::env::current_dir() else {
        return;
    };

    let candidates = complete(loader, &cwd, &request.words, request.cword);
    let mut out = io::stdout().lock();
    for candidate in candidates {
        if writeln!(out, "{candidate}").is_err() {
            break;
        }
    }
}
