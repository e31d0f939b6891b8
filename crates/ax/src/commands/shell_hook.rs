//! `ax --setup` / `ax --reset` - register or remove the bash completion hook
//!
//! The hook is a single line in the shell init file, recognized by its
//! trailing tag so it can be found and removed again.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use ax_core::{config::RC_FILE_VAR, Error, Settings};

/// Marker identifying the hook line.
pub const HOOK_TAG: &str = "# ax-completion";

/// The hook: a completion function feeding `ax --complete` into `compgen`.
pub fn hook_line() -> String {
    format!(
        r#"_ax_complete() {{ local IFS=$'\n'; COMPREPLY=($(compgen -W "$(ax --complete "$COMP_CWORD" "${{COMP_WORDS[@]}}" 2>/dev/null)" -- "${{COMP_WORDS[COMP_CWORD]}}")); }}; complete -o default -F _ax_complete ax {HOOK_TAG}"#
    )
}

fn is_hook(line: &str) -> bool {
    line.trim_end().ends_with(HOOK_TAG)
}

/// The init file to edit; it has to exist already.
fn rc_file(settings: &Settings) -> Result<PathBuf, Error> {
    let rc = settings.rc_file.clone().ok_or_else(|| {
        Error::MissingPrerequisite(format!(
            "no shell init file: home directory unknown and {RC_FILE_VAR} not set"
        ))
    })?;
    if rc.is_file() {
        Ok(rc)
    } else {
        Err(Error::MissingPrerequisite(format!(
            "shell init file {} not found",
            rc.display()
        )))
    }
}

/// Append the hook to `rc`.
///
/// # Errors
/// `AlreadySetup` if a hook line is present.
pub fn install(rc: &Path) -> Result<()> {
    let content =
        fs::read_to_string(rc).with_context(|| format!("Failed to read {}", rc.display()))?;
    if content.lines().any(is_hook) {
        return Err(Error::AlreadySetup(rc.to_path_buf()).into());
    }

    let separator = if content.is_empty() || content.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    fs::write(rc, format!("{content}{separator}{}\n", hook_line()))
        .with_context(|| format!("Failed to write {}", rc.display()))?;
    Ok(())
}

/// Remove every hook line from `rc`. Returns whether anything was removed.
pub fn uninstall(rc: &Path) -> Result<bool> {
    let content =
        fs::read_to_string(rc).with_context(|| format!("Failed to read {}", rc.display()))?;
    if !content.lines().any(is_hook) {
        return Ok(false);
    }

    let kept: String = content
        .split_inclusive('\n')
        .filter(|line| !is_hook(line))
        .collect();
    fs::write(rc, kept).with_context(|| format!("Failed to write {}", rc.display()))?;
    Ok(true)
}

pub fn setup(settings: &Settings) -> Result<()> {
    let rc = rc_file(settings)?;
    install(&rc)?;
    println!("Completion registered in {}; open a new shell to use it.", rc.display());
    Ok(())
}

pub fn reset(settings: &Settings) -> Result<()> {
    let rc = rc_file(settings)?;
    if uninstall(&rc)? {
        println!("Completion removed from {}.", rc.display());
    } else {
        println!("Completion was not registered in {}.", rc.display());
    }
    Ok(())
}
