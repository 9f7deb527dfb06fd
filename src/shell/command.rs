//! Shell command execution.
//!
//! Recipe commands are plain command lines (`./configure`, `make install`)
//! and are handed to the platform shell unchanged, so pipes, `&&` and
//! quoting behave exactly as they would when typed. The child inherits our
//! stdout and stderr, so build diagnostics reach the user as-is.

use crate::error::{GuardError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// A result with the given exit code.
    pub fn exited(exit_code: Option<i32>, duration: Duration) -> Self {
        Self {
            exit_code,
            duration,
            success: exit_code == Some(0),
        }
    }

    fn from_status(status: ExitStatus, duration: Duration) -> Self {
        Self {
            exit_code: status.code(),
            duration,
            success: status.success(),
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory (defaults to ours).
    pub cwd: Option<PathBuf>,
}

impl CommandOptions {
    /// Run in `dir`.
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }
}

/// Execute a command through the platform shell and wait for it.
///
/// A command that runs and exits non-zero is `Ok` with `success == false`.
/// Only a failure to start the shell is an error, and it carries the OS
/// reason (missing working directory, no shell, ...).
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let mut cmd = shell_command(command);
    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    tracing::debug!("exec: {} (cwd: {:?})", command, options.cwd);

    let start = Instant::now();
    let status = cmd.status().map_err(|source| GuardError::CommandFailed {
        command: command.to_string(),
        source,
    })?;

    Ok(CommandResult::from_status(status, start.elapsed()))
}

/// Run a command in `cwd`.
pub fn execute_inherited(command: &str, cwd: &Path) -> Result<CommandResult> {
    execute(command, &CommandOptions::default().in_dir(cwd))
}

// Non-login, non-interactive: recipes must not depend on the user's rc files.
#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd.exe");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn successful_command() {
        let temp = TempDir::new().unwrap();
        let result = execute_inherited("true", temp.path()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
    }

    #[test]
    fn nonzero_exit_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let result = execute_inherited("exit 3", temp.path()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn shell_syntax_is_honored() {
        let temp = TempDir::new().unwrap();
        let result = execute_inherited("false || exit 0", temp.path()).unwrap();

        assert!(result.success);
    }

    #[test]
    fn runs_in_given_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("configure"), "x").unwrap();

        let result = execute_inherited("test -f configure", temp.path()).unwrap();
        assert!(result.success);

        let result = execute("test -f configure", &CommandOptions::default()).unwrap();
        assert!(!result.success);
    }

    #[test]
    fn side_effects_land_in_cwd() {
        let temp = TempDir::new().unwrap();
        execute_inherited("echo built > out.txt", temp.path()).unwrap();

        let out = std::fs::read_to_string(temp.path().join("out.txt")).unwrap();
        assert_eq!(out.trim(), "built");
    }

    #[test]
    fn missing_directory_reports_os_reason() {
        let dir = Path::new("/nonexistent/libguard/dir");
        let err = execute_inherited("make", dir).unwrap_err();

        assert!(matches!(err, GuardError::CommandFailed { .. }));
        let msg = err.to_string();
        assert!(msg.contains("'make'"));
        assert!(msg.contains("os error"), "no OS reason in {:?}", msg);
    }

    #[test]
    fn exited_sets_success_from_code() {
        assert!(CommandResult::exited(Some(0), Duration::ZERO).success);
        assert!(!CommandResult::exited(Some(2), Duration::ZERO).success);
        assert!(!CommandResult::exited(None, Duration::ZERO).success);
    }
}
