//! Workspace discovery
//!
//! A workspace is the closest ancestor (inclusive) of a start directory that
//! contains the `.ax` marker directory. Resolution walks strictly upward and
//! is recomputed from the filesystem on every call.

use std::path::{Component, Path, PathBuf};

/// Name of the directory that marks a workspace root.
pub const MARKER_DIR: &str = ".ax";

/// Extension every command script carries.
pub const SCRIPT_EXTENSION: &str = "sh";

/// Scripts whose name starts with this character are never commands.
pub const HIDDEN_PREFIX: char = '.';

/// Leading character of anything that looks like an option.
pub const OPTION_PREFIX: char = '-';

/// A resolved workspace: its root and the marker directory inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    marker: PathBuf,
}

impl Workspace {
    /// Walk from `start` up to the filesystem root and return the first
    /// directory holding a marker directory.
    pub fn discover(start: &Path) -> Option<Self> {
        let found = start
            .ancestors()
            .find(|dir| dir.join(MARKER_DIR).is_dir())
            .map(|dir| Self {
                root: dir.to_path_buf(),
                marker: dir.join(MARKER_DIR),
            });

        match &found {
            Some(ws) => tracing::debug!(root = %ws.root.display(), "workspace resolved"),
            None => tracing::debug!(start = %start.display(), "no workspace found"),
        }
        found
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn marker(&self) -> &Path {
        &self.marker
    }

    /// Path of the script backing `name`, if `name` is a visible command
    /// with an existing script directly inside the marker directory.
    pub fn command_script(&self, name: &str) -> Option<PathBuf> {
        if !is_visible_name(name) || !is_plain_name(name) {
            return None;
        }
        let script = self.marker.join(format!("{name}.{SCRIPT_EXTENSION}"));
        script.is_file().then_some(script)
    }
}

/// True for names that can be registered and dispatched.
pub fn is_visible_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with(HIDDEN_PREFIX)
}

/// True when `name` is a single path component with no separators, so
/// joining it onto the marker cannot leave the marker directory.
fn is_plain_name(name: &str) -> bool {
    if name.contains(std::path::is_separator) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(c)), None) if c == name
    )
}

/// Outcome of resolving a workspace with an optional command name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub workspace: Workspace,
    /// Set only when a command name was requested and its script exists.
    pub command: Option<String>,
}

/// Resolve the workspace containing `start` and, if `name` is given, check
/// that it names a dispatchable command there.
///
/// Returns `None` when no workspace exists above `start`.
pub fn resolve(start: &Path, name: Option<&str>) -> Option<Resolution> {
    Workspace::discover(start).map(|workspace| {
        let command = name
            .filter(|n| workspace.command_script(n).is_some())
            .map(str::to_string);
        Resolution { workspace, command }
    })
}

/// The values a loaded command can read about its own invocation.
///
/// Built by the dispatcher and handed to the loader explicitly; scripts
/// see it as `AX_ROOT`, `AX_PATH` and `AX_NAME`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    pub root: PathBuf,
    pub marker: PathBuf,
    pub command: String,
}

impl InvocationContext {
    pub fn new(workspace: &Workspace, command: impl Into<String>) -> Self {
        Self {
            root: workspace.root().to_path_buf(),
            marker: workspace.marker().to_path_buf(),
            command: command.into(),
        }
    }

    /// Environment variables exposing this context to a script.
    pub fn env_vars(&self) -> [(&'static str, String); 3] {
        [
            ("AX_ROOT", self.root.display().to_string()),
            ("AX_PATH", self.marker.display().to_string()),
            ("AX_NAME", self.command.clone()),
        ]
    }
}
