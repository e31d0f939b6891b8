//! Command registry: which scripts in a marker directory are commands.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{
    contract::{describe, Loader},
    workspace::{is_visible_name, InvocationContext, Workspace, SCRIPT_EXTENSION},
};

/// A registered command and its self-reported description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSummary {
    pub name: String,
    pub description: String,
}

/// Command name for a script path, `None` if the path is not a visible
/// `.sh` script.
pub fn command_name(script: &Path) -> Option<String> {
    if script.extension().and_then(|e| e.to_str()) != Some(SCRIPT_EXTENSION) {
        return None;
    }
    let file_name = script.file_name()?.to_str()?;
    if !is_visible_name(file_name) {
        return None;
    }
    script
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Command scripts directly inside `marker`, sorted by file name.
///
/// Unreadable or missing directories yield an empty list.
pub fn list_scripts(marker: &Path) -> Vec<PathBuf> {
    if marker.as_os_str().is_empty() {
        return Vec::new();
    }

    WalkDir::new(marker)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| {
            entry
                .map_err(|e| tracing::debug!(error = %e, "skipping unreadable entry"))
                .ok()
        })
        .filter(|entry| entry.path().is_file())
        .filter(|entry| command_name(entry.path()).is_some())
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Names of every command in the workspace, sorted.
pub fn command_names(workspace: &Workspace) -> Vec<String> {
    list_scripts(workspace.marker())
        .iter()
        .filter_map(|p| command_name(p))
        .collect()
}

/// Every command with its description. Each probe gets its own loaded
/// command so nothing carries over between scripts.
pub fn describe_commands<L: Loader>(loader: &L, workspace: &Workspace) -> Vec<CommandSummary> {
    list_scripts(workspace.marker())
        .into_iter()
        .filter_map(|script| {
            let name = command_name(&script)?;
            let command = loader.load(&script, InvocationContext::new(workspace, name.clone()));
            Some(CommandSummary {
                description: describe(&command),
                name,
            })
        })
        .collect()
}
