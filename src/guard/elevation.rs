//! Install-stage privilege strategy.
//!
//! The install command is tried at most twice: first through the elevation
//! helper, then as-is. The elevated attempt only exists when a helper is
//! configured, found on `PATH`, and the process is not already privileged.

use crate::config::InstallConfig;
use crate::guard::GuardContext;

/// One way of running the install command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallAttempt {
    /// Full command line.
    pub command: String,
    /// Whether this attempt goes through the elevation helper.
    pub elevated: bool,
}

impl InstallAttempt {
    fn plain(command: &str) -> Self {
        Self {
            command: command.to_string(),
            elevated: false,
        }
    }
}

/// Decide which install attempts to make, in order.
pub fn resolve_install_attempts(
    install: &InstallConfig,
    ctx: &GuardContext<'_>,
) -> Vec<InstallAttempt> {
    let plain = InstallAttempt::plain(&install.command);

    let Some(helper) = install.elevation.as_deref() else {
        return vec![plain];
    };

    if (ctx.is_elevated)() {
        tracing::debug!("Already privileged, not using {}", helper);
        return vec![plain];
    }

    match (ctx.find_program)(helper) {
        Some(path) => {
            tracing::debug!("Elevation helper found at {}", path.display());
            vec![
                InstallAttempt {
                    command: format!("{} {}", helper, install.command),
                    elevated: true,
                },
                plain,
            ]
        }
        None => {
            tracing::debug!("Elevation helper '{}' not available", helper);
            vec![plain]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::shell::CommandResult;
    use std::path::{Path, PathBuf};

    fn no_run(_: &str, _: &Path) -> Result<CommandResult> {
        panic!("no commands expected")
    }

    fn ctx<'a>(
        find: &'a dyn Fn(&str) -> Option<PathBuf>,
        elevated: &'a dyn Fn() -> bool,
    ) -> GuardContext<'a> {
        GuardContext {
            run_command: &no_run,
            find_program: find,
            is_elevated: elevated,
        }
    }

    #[test]
    fn helper_available_tries_elevated_then_plain() {
        let find = |p: &str| Some(PathBuf::from(format!("/usr/bin/{}", p)));
        let attempts = resolve_install_attempts(&InstallConfig::default(), &ctx(&find, &|| false));

        assert_eq!(
            attempts,
            vec![
                InstallAttempt {
                    command: "sudo make install".to_string(),
                    elevated: true
                },
                InstallAttempt {
                    command: "make install".to_string(),
                    elevated: false
                },
            ]
        );
    }

    #[test]
    fn helper_missing_falls_back_to_plain() {
        let find = |_: &str| -> Option<PathBuf> { None };
        let attempts = resolve_install_attempts(&InstallConfig::default(), &ctx(&find, &|| false));

        assert_eq!(attempts.len(), 1);
        assert!(!attempts[0].elevated);
        assert_eq!(attempts[0].command, "make install");
    }

    #[test]
    fn already_root_skips_helper() {
        let find = |_: &str| -> Option<PathBuf> { panic!("should not look up helper") };
        let attempts = resolve_install_attempts(&InstallConfig::default(), &ctx(&find, &|| true));

        assert_eq!(attempts, vec![InstallAttempt::plain("make install")]);
    }

    #[test]
    fn no_helper_configured() {
        let install = InstallConfig {
            command: "make install".to_string(),
            elevation: None,
        };
        let find = |_: &str| Some(PathBuf::from("/usr/bin/sudo"));
        let attempts = resolve_install_attempts(&install, &ctx(&find, &|| false));

        assert_eq!(attempts, vec![InstallAttempt::plain("make install")]);
    }

    #[test]
    fn custom_helper_is_used() {
        let install = InstallConfig {
            command: "make install".to_string(),
            elevation: Some("doas".to_string()),
        };
        let find = |p: &str| (p == "doas").then(|| PathBuf::from("/usr/bin/doas"));
        let attempts = resolve_install_attempts(&install, &ctx(&find, &|| false));

        assert_eq!(attempts[0].command, "doas make install");
    }
}
