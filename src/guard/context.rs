//! Injectable side effects for the guard pipeline.

use crate::error::Result;
use crate::shell::{self, CommandResult};
use std::path::{Path, PathBuf};

/// Mockable dependencies for the guard.
pub struct GuardContext<'a> {
    /// Run a shell command in a working directory.
    pub run_command: &'a dyn Fn(&str, &Path) -> Result<CommandResult>,
    /// Look up a program on `PATH`.
    pub find_program: &'a dyn Fn(&str) -> Option<PathBuf>,
    /// Whether the process already has elevated privileges.
    pub is_elevated: &'a dyn Fn() -> bool,
}

/// Build the default `GuardContext` for production use.
///
/// Commands inherit stdout/stderr so build tool diagnostics reach the user
/// unmodified.
pub fn default_context() -> GuardContext<'static> {
    GuardContext {
        run_command: &shell::execute_inherited,
        find_program: &shell::find_program,
        is_elevated: &shell::is_elevated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_runs_real_commands() {
        let ctx = default_context();
        let temp = tempfile::TempDir::new().unwrap();

        let ok = (ctx.run_command)("true", temp.path()).unwrap();
        let failed = (ctx.run_command)("false", temp.path()).unwrap();

        assert!(ok.success);
        assert!(!failed.success);
    }

    #[test]
    fn default_context_finds_sh() {
        let ctx = default_context();
        assert!((ctx.find_program)("sh").is_some());
    }
}
