//! Shell completion
//!
//! Position 1 completes the command name or a top-level option. Later
//! positions are delegated to the typed command's `list`, whose output is
//! narrowed by polarity: option-like candidates when the word under the
//! cursor starts with `-`, everything else otherwise.

use std::path::Path;

use crate::{
    contract::{CommandContract, Loader},
    options::TopLevelOption,
    registry::command_names,
    workspace::{resolve, InvocationContext, Workspace, OPTION_PREFIX},
};

/// Candidates for the word at `cword` in `words` (`words[0]` is the
/// program name). Never fails; anything unresolvable yields no candidates.
pub fn complete<L: Loader>(loader: &L, cwd: &Path, words: &[String], cword: usize) -> Vec<String> {
    let current = words.get(cword).map_or("", String::as_str);

    match cword {
        0 => Vec::new(),
        1 if current.starts_with(OPTION_PREFIX) => TopLevelOption::flags()
            .into_iter()
            .map(str::to_string)
            .collect(),
        1 => Workspace::discover(cwd)
            .map(|ws| command_names(&ws))
            .unwrap_or_default(),
        _ => delegate(loader, cwd, words, cword, current),
    }
}

fn delegate<L: Loader>(
    loader: &L,
    cwd: &Path,
    words: &[String],
    cword: usize,
    current: &str,
) -> Vec<String> {
    let Some(name) = words.get(1).filter(|n| !n.starts_with(OPTION_PREFIX)) else {
        return Vec::new();
    };
    let Some(resolution) = resolve(cwd, Some(name.as_str())) else {
        return Vec::new();
    };
    let Some(script) = resolution
        .command
        .as_deref()
        .and_then(|n| resolution.workspace.command_script(n))
    else {
        return Vec::new();
    };

    let end = (cword + 1).min(words.len());
    let args = words.get(2..end).unwrap_or_default();
    let command = loader.load(&script, InvocationContext::new(&resolution.workspace, name.clone()));

    match command.list(args) {
        Ok(candidates) => filter_polarity(candidates, current),
        Err(e) => {
            tracing::debug!(command = %name, error = %e, "list failed during completion");
            Vec::new()
        }
    }
}

/// Keep option-like candidates when `current` is option-like, the rest
/// otherwise.
pub fn filter_polarity(candidates: Vec<String>, current: &str) -> Vec<String> {
    let want_options = current.starts_with(OPTION_PREFIX);
    candidates
        .into_iter()
        .filter(|c| c.starts_with(OPTION_PREFIX) == want_options)
        .collect()
}
