//! Shell-script commands
//!
//! Every contract call spawns a fresh interpreter that sources the script
//! and calls the requested function if the script defines it. Nothing a
//! script defines survives from one call to the next.

use std::{
    ffi::{OsStr, OsString},
    io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Output, Stdio},
};

use crate::{
    contract::{CommandContract, Loader},
    workspace::InvocationContext,
    Error, Result,
};

/// Sources `$AX_SCRIPT`, then runs function `$1` with the remaining args.
/// An undefined function is a silent no-op with status 0.
const DRIVER: &str = r#"source "$AX_SCRIPT" || exit
fn=$1
shift
if declare -F "$fn" >/dev/null; then
  "$fn" "$@"
fi"#;

/// Loads `.sh` scripts through an external shell.
#[derive(Debug, Clone)]
pub struct ShellLoader {
    shell: String,
}

impl ShellLoader {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Loader for ShellLoader {
    type Command = ScriptCommand;

    fn load(&self, script: &Path, context: InvocationContext) -> ScriptCommand {
        ScriptCommand {
            shell: self.shell.clone(),
            script: script.to_path_buf(),
            context,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScriptCommand {
    shell: String,
    script: PathBuf,
    context: InvocationContext,
}

impl ScriptCommand {
    pub fn context(&self) -> &InvocationContext {
        &self.context
    }

    fn invocation<S: AsRef<OsStr>>(&self, function: &str, args: &[S], errexit: bool) -> Command {
        let driver = if errexit {
            format!("set -e\n{DRIVER}")
        } else {
            DRIVER.to_string()
        };

        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c")
            .arg(driver)
            .arg(format!("ax-{function}"))
            .arg(function)
            .args(args)
            .env("AX_SCRIPT", &self.script)
            .envs(self.context.env_vars());
        cmd
    }

    /// Run a probe with captured stdout and discarded stderr.
    fn capture(&self, function: &str, args: &[String]) -> Result<String> {
        tracing::debug!(script = %self.script.display(), function, "probing script");
        let Output { status, stdout, .. } = self
            .invocation(function, args, false)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        self.check(status)?;
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }

    fn check(&self, status: ExitStatus) -> Result<()> {
        match status.code() {
            Some(0) => Ok(()),
            Some(code) => Err(self.failure(format!("exited with status {code}"))),
            None => Err(self.failure("terminated by signal".to_string())),
        }
    }

    fn failure(&self, reason: String) -> Error {
        Error::CommandFailure {
            name: self.context.command.clone(),
            reason,
        }
    }

    fn spawn_error(&self, err: io::Error) -> Error {
        if err.kind() == io::ErrorKind::NotFound {
            Error::MissingPrerequisite(format!("shell '{}' not found on PATH", self.shell))
        } else {
            Error::Io(err)
        }
    }
}

impl CommandContract for ScriptCommand {
    fn info(&self) -> Result<Option<String>> {
        let out = self.capture("info", &[])?;
        Ok(out
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string))
    }

    fn help(&self) -> Result<()> {
        let status = self
            .invocation::<&str>("help", &[], false)
            .status()
            .map_err(|e| self.spawn_error(e))?;
        self.check(status)
    }

    fn list(&self, args: &[String]) -> Result<Vec<String>> {
        let out = self.capture("list", args)?;
        Ok(out
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }

    fn main(&self, args: &[OsString]) -> Result<i32> {
        tracing::debug!(script = %self.script.display(), ?args, "running main");
        let status = self
            .invocation("main", args, true)
            .status()
            .map_err(|e| self.spawn_error(e))?;
        status
            .code()
            .ok_or_else(|| self.failure("terminated by signal".to_string()))
    }
}
