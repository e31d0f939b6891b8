//! Common test helpers and fixtures for integration tests
//!
//! The `TestHarness` provides test isolation by:
//! - Creating a temporary directory for each test with a `proj/` workspace
//! - Pointing `AX_RC_FILE` into the temp directory
//! - Running the built `ax` binary with a controlled environment

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Test harness for integration tests
pub struct TestHarness {
    /// Temporary directory for the test (kept for automatic cleanup on drop)
    _temp_dir: TempDir,
    /// Scratch area outside any workspace
    pub outside: PathBuf,
    /// Workspace root (contains `.ax/`)
    pub root: PathBuf,
    /// Path to the ax binary
    pub ax_bin: PathBuf,
    /// Shell init file used by --setup / --reset
    pub rc_file: PathBuf,
}

impl TestHarness {
    /// A temp directory with an initialized (empty) workspace at `proj/`.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp directory")?;
        let outside = temp_dir.path().join("outside");
        let root = temp_dir.path().join("proj");
        fs::create_dir_all(&outside).context("Failed to create outside directory")?;
        fs::create_dir_all(root.join(".ax")).context("Failed to create marker")?;

        Ok(Self {
            rc_file: temp_dir.path().join("bashrc"),
            outside,
            root,
            ax_bin: PathBuf::from(env!("CARGO_BIN_EXE_ax")),
            _temp_dir: temp_dir,
        })
    }

    pub fn marker(&self) -> PathBuf {
        self.root.join(".ax")
    }

    /// Write `.ax/<file>` with `body`.
    pub fn write_script(&self, file: &str, body: &str) {
        fs::write(self.marker().join(file), body).expect("Failed to write script");
    }

    /// Create a directory under the workspace root and return it.
    pub fn subdir(&self, rel: &str) -> PathBuf {
        let dir = self.root.join(rel);
        fs::create_dir_all(&dir).expect("Failed to create subdir");
        dir
    }

    /// Run ax in the workspace root
    pub fn ax(&self, args: &[&str]) -> CommandResult {
        self.ax_in_dir(&self.root, args)
    }

    /// Run ax from a specific directory
    pub fn ax_in_dir(&self, dir: &Path, args: &[&str]) -> CommandResult {
        self.ax_with_env(dir, args, &[])
    }

    /// Run ax from `dir` with extra environment variables
    pub fn ax_with_env(&self, dir: &Path, args: &[&str], env: &[(&str, &str)]) -> CommandResult {
        let mut cmd = Command::new(&self.ax_bin);
        cmd.args(args)
            .current_dir(dir)
            .env("AX_RC_FILE", &self.rc_file)
            .env_remove("AX_UPDATE_URL")
            .env_remove("AX_SHELL")
            .env_remove("AX_LOG");
        env.iter().for_each(|(key, value)| {
            cmd.env(key, value);
        });

        cmd.output()
            .map(|output| CommandResult {
                success: output.status.success(),
                exit_code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
            .unwrap_or_else(|_| CommandResult {
                success: false,
                exit_code: None,
                stdout: String::new(),
                stderr: "Command execution failed".to_string(),
            })
    }
}

/// Result of a command execution
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn assert_exit(&self, code: i32) -> &Self {
        assert_eq!(
            self.exit_code,
            Some(code),
            "unexpected exit code\nStdout: {}\nStderr: {}",
            self.stdout,
            self.stderr
        );
        self
    }

    pub fn assert_stdout_contains(&self, needle: &str) -> &Self {
        assert!(
            self.stdout.contains(needle),
            "stdout should contain '{needle}'\nStdout: {}\nStderr: {}",
            self.stdout,
            self.stderr
        );
        self
    }

    pub fn assert_stderr_contains(&self, needle: &str) -> &Self {
        assert!(
            self.stderr.contains(needle),
            "stderr should contain '{needle}'\nStdout: {}\nStderr: {}",
            self.stdout,
            self.stderr
        );
        self
    }

    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}
