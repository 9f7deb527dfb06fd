//! Status command implementation.
//!
//! The `libguard status` command reports whether the target artifact is
//! installed. It exits 0 when it is and 1 when it is not, so it can be used
//! as a shell test.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::StatusArgs;
use crate::config::GuardConfig;
use crate::error::{GuardError, Result};
use crate::guard::{check_artifact, ArtifactStatus, Recipe};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    project_root: PathBuf,
    config: GuardConfig,
    args: StatusArgs,
}

/// Machine-readable status report.
#[derive(Debug, Serialize)]
struct StatusReport<'a> {
    name: &'a str,
    target: &'a Path,
    status: ArtifactStatus,
    installed: bool,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(project_root: &Path, config: GuardConfig, args: StatusArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let recipe = Recipe::from_config(&self.config, &self.project_root);
        let status = check_artifact(&recipe.target);
        tracing::debug!("{} is {:?}", recipe.target.display(), status);

        if self.args.json {
            let report = StatusReport {
                name: &recipe.name,
                target: &recipe.target,
                status,
                installed: status.is_installed(),
            };
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| GuardError::Other(e.into()))?;
            ui.message(&json);
        } else {
            match status {
                ArtifactStatus::Present => ui.success(&format!(
                    "{} installed at {}",
                    recipe.name,
                    recipe.target.display()
                )),
                ArtifactStatus::Missing => ui.warning(&format!(
                    "{} not installed ({} is missing)",
                    recipe.name,
                    recipe.target.display()
                )),
                ArtifactStatus::NotAFile => ui.warning(&format!(
                    "{} not installed ({} is not a regular file)",
                    recipe.name,
                    recipe.target.display()
                )),
            }
        }

        if status.is_installed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn command(temp: &TempDir, target: &Path, json: bool) -> StatusCommand {
        let config = GuardConfig {
            target: target.to_path_buf(),
            ..Default::default()
        };
        StatusCommand::new(temp.path(), config, StatusArgs { json })
    }

    #[test]
    fn present_target_succeeds() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("libta_lib.a");
        fs::write(&target, b"!<arch>\n").unwrap();

        let mut ui = MockUI::new();
        let result = command(&temp, &target, false).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("ta-lib installed"));
    }

    #[test]
    fn missing_target_exits_1() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("libta_lib.a");

        let mut ui = MockUI::new();
        let result = command(&temp, &target, false).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_warning("is missing"));
    }

    #[test]
    fn directory_target_is_not_installed() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("libta_lib.a");
        fs::create_dir(&target).unwrap();

        let mut ui = MockUI::new();
        let result = command(&temp, &target, false).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_warning("not a regular file"));
    }

    #[test]
    fn json_output_is_parseable() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("libta_lib.a");

        let mut ui = MockUI::new();
        command(&temp, &target, true).execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["status"], "missing");
        assert_eq!(value["installed"], false);
        assert_eq!(value["name"], "ta-lib");
    }
}
