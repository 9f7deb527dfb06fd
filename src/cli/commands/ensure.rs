//! Ensure command implementation.
//!
//! The `libguard ensure` command runs the installation guard: it returns
//! immediately when the library is already installed and otherwise runs
//! every stage of the recipe.

use std::path::{Path, PathBuf};

use crate::cli::args::EnsureArgs;
use crate::config::GuardConfig;
use crate::error::{GuardError, Result};
use crate::guard::{default_context, ensure_installed, plan, Recipe};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The ensure command implementation.
pub struct EnsureCommand {
    project_root: PathBuf,
    config: GuardConfig,
    args: EnsureArgs,
}

impl EnsureCommand {
    /// Create a new ensure command.
    pub fn new(project_root: &Path, config: GuardConfig, args: EnsureArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    fn recipe(&self) -> Recipe {
        Recipe::from_config(&self.config, &self.project_root)
    }

    fn dry_run(&self, recipe: &Recipe, ui: &mut dyn UserInterface) -> CommandResult {
        let ctx = default_context();
        let stages = plan(recipe, &ctx);

        if stages.is_empty() {
            ui.success(&format!(
                "{} already installed at {}, nothing to do",
                recipe.name,
                recipe.target.display()
            ));
            return CommandResult::success();
        }

        ui.show_header(&format!("Would install {}", recipe.name));
        let total = stages.len();
        for (index, planned) in stages.iter().enumerate() {
            let line = match &planned.cwd {
                Some(cwd) => format!(
                    "[{}/{}] {}: {} (in {})",
                    index + 1,
                    total,
                    planned.stage,
                    planned.description,
                    cwd.display()
                ),
                None => format!(
                    "[{}/{}] {}: {}",
                    index + 1,
                    total,
                    planned.stage,
                    planned.description
                ),
            };
            ui.message(&line);
        }
        CommandResult::success()
    }
}

impl Command for EnsureCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let recipe = self.recipe();

        if self.args.dry_run {
            return Ok(self.dry_run(&recipe, ui));
        }

        match ensure_installed(&recipe, &default_context(), ui) {
            Ok(outcome) => {
                tracing::debug!("Guard finished: {}", outcome);
                Ok(CommandResult::success())
            }
            Err(e @ GuardError::StageFailed { .. }) => {
                tracing::debug!("Guard failed: {:?}", e);
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
