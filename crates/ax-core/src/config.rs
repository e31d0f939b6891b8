//! Runtime settings, read from the environment.
//!
//! | Variable        | Meaning                                   | Default        |
//! |-----------------|-------------------------------------------|----------------|
//! | `AX_SHELL`      | interpreter that runs command scripts     | `bash`         |
//! | `AX_RC_FILE`    | shell init file for the completion hook   | `~/.bashrc`    |
//! | `AX_UPDATE_URL` | where `--update` downloads the executable | none           |
//! | `AX_LOG`        | tracing filter directives                 | `warn`         |

use std::path::PathBuf;

use directories::BaseDirs;

pub const SHELL_VAR: &str = "AX_SHELL";
pub const RC_FILE_VAR: &str = "AX_RC_FILE";
pub const UPDATE_URL_VAR: &str = "AX_UPDATE_URL";
pub const LOG_VAR: &str = "AX_LOG";

const DEFAULT_SHELL: &str = "bash";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub shell: String,
    /// `None` when neither `AX_RC_FILE` nor a home directory is available.
    pub rc_file: Option<PathBuf>,
    pub update_url: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source. Empty values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            shell: get(SHELL_VAR).unwrap_or_else(|| DEFAULT_SHELL.to_string()),
            rc_file: get(RC_FILE_VAR).map(PathBuf::from).or_else(default_rc_file),
            update_url: get(UPDATE_URL_VAR),
        }
    }
}

fn default_rc_file() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(".bashrc"))
}
