//! Config command implementation.
//!
//! The `libguard config` command prints the resolved configuration, after
//! defaults and the `--target` override have been applied.

use crate::cli::args::ConfigArgs;
use crate::config::GuardConfig;
use crate::error::{GuardError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    config: GuardConfig,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(config: GuardConfig, args: ConfigArgs) -> Self {
        Self { config, args }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let json = serde_json::to_string_pretty(&self.config)
                .map_err(|e| GuardError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let yaml =
                serde_yaml::to_string(&self.config).map_err(|e| GuardError::Other(e.into()))?;
            ui.message(&yaml);
        }

        Ok(CommandResult::success())
    }
}
