//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, EnsureArgs};
use crate::config::{load_config, validate, GuardConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Load, override and validate the configuration for this invocation.
    pub fn load_config(&self, cli: &Cli) -> Result<GuardConfig> {
        let mut config = load_config(&self.project_root, cli.config.as_deref())?;
        if let Some(target) = &cli.target {
            tracing::debug!("Target overridden to {}", target.display());
            config.target = target.clone();
        }
        validate(&config)?;
        Ok(config)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand means `ensure`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Ensure(args)) => {
                let config = self.load_config(cli)?;
                let cmd =
                    super::ensure::EnsureCommand::new(&self.project_root, config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Status(args)) => {
                let config = self.load_config(cli)?;
                let cmd =
                    super::status::StatusCommand::new(&self.project_root, config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(self.load_config(cli)?, args.clone());
                cmd.execute(ui)
            }
            None => {
                let config = self.load_config(cli)?;
                let cmd = super::ensure::EnsureCommand::new(
                    &self.project_root,
                    config,
                    EnsureArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuardError;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn target_flag_overrides_config() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from(["libguard", "--target", "/opt/x/libfoo.a", "status"]);
        let config = CommandDispatcher::new(temp.path().to_path_buf())
            .load_config(&cli)
            .unwrap();
        assert_eq!(config.target, PathBuf::from("/opt/x/libfoo.a"));
    }

    #[test]
    fn invalid_config_is_rejected_before_dispatch() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".libguard");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), "build: ''\n").unwrap();

        let cli = Cli::parse_from(["libguard", "status"]);
        let mut ui = MockUI::new();
        let err = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap_err();
        assert!(matches!(err, GuardError::ConfigValidationError { .. }));
    }

    #[test]
    fn status_dispatch_reports_missing() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("libta_lib.a");
        let cli = Cli::parse_from([
            "libguard",
            "--target",
            target.to_str().unwrap(),
            "status",
        ]);
        let mut ui = MockUI::new();

        let result = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
    }
}
