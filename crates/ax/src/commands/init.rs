//! `ax --init` - create a workspace marker in the current directory

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use ax_core::{workspace::MARKER_DIR, Error};

/// File name of the scaffolded template. Hidden, so never a command.
pub const TEMPLATE_NAME: &str = ".template.sh";

const TEMPLATE: &str = r#"# Template for an ax command.
#
# Copy this file to <name>.sh in this directory to add the command
# `ax <name>`. Every function below is optional.
#
# Read-only context available to every function:
#   AX_ROOT  absolute path of the workspace root
#   AX_PATH  absolute path of this .ax directory
#   AX_NAME  name the command was invoked as

# One-line description shown in `ax -?`.
info() {
  echo "Describe the command here."
}

# Full help, shown by `ax <name> -?`.
help() {
  echo "Usage: ax $AX_NAME [args...]"
}

# Completion candidates, one per line. "$@" holds the words typed after
# the command name. Lines starting with '-' are offered only when the
# word being completed starts with '-'.
list() {
  echo "--verbose"
}

# Entry point. Runs with `set -e`; the return value is the exit code.
main() {
  echo "Hello from $AX_NAME in $AX_ROOT"
}
"#;

/// Create `<dir>/.ax` with the template script.
///
/// # Errors
/// `AlreadyInitialized` if anything named `.ax` exists in `dir`; it is left
/// untouched.
pub fn init_in(dir: &Path) -> Result<PathBuf> {
    let marker = dir.join(MARKER_DIR);
    if fs::symlink_metadata(&marker).is_ok() {
        return Err(Error::AlreadyInitialized(marker).into());
    }

    fs::create_dir(&marker)
        .with_context(|| format!("Failed to create {}", marker.display()))?;
    fs::write(marker.join(TEMPLATE_NAME), TEMPLATE)
        .with_context(|| format!("Failed to write {TEMPLATE_NAME}"))?;

    tracing::debug!(marker = %marker.display(), "workspace initialized");
    Ok(marker)
}

pub fn run(cwd: &Path) -> Result<()> {
    let marker = init_in(cwd)?;
    println!("Initialized ax workspace in {}", marker.display());
    println!("Copy {TEMPLATE_NAME} to <name>.sh to add a command.");
    Ok(())
}
