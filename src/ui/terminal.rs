//! Plain terminal UI.

use super::theme::{should_use_colors, GuardTheme};
use super::{OutputMode, UserInterface};

/// UI implementation that writes straight to stdout/stderr.
///
/// Status lines go to stdout; warnings and errors go to stderr so that
/// `status --json` output stays machine-readable.
pub struct TerminalUI {
    mode: OutputMode,
    theme: GuardTheme,
}

impl TerminalUI {
    /// Create a console UI, picking colors from the environment.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            GuardTheme::new()
        } else {
            GuardTheme::plain()
        };
        Self { mode, theme }
    }

    /// Create with an explicit theme (for testing).
    pub fn with_theme(mode: OutputMode, theme: GuardTheme) -> Self {
        Self { mode, theme }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            println!("{}", self.theme.format_header(title));
        }
    }

    fn show_stage(&mut self, current: usize, total: usize, name: &str) {
        if self.mode.shows_progress() {
            println!("{}", self.theme.format_stage(current, total, name));
        }
    }

    fn show_command(&mut self, command: &str) {
        if self.mode.shows_commands() {
            println!("{}", self.theme.format_command(command));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_mode_echoes_commands() {
        let mut ui = TerminalUI::with_theme(OutputMode::Verbose, GuardTheme::plain());
        ui.show_header("ta-lib");
        ui.show_command("make");
        ui.success("done");
    }

    #[test]
    fn quiet_mode_does_not_panic() {
        let mut ui = TerminalUI::with_theme(OutputMode::Quiet, GuardTheme::plain());
        ui.message("shown");
        ui.show_stage(1, 5, "extract");
        ui.error("still shown");
    }
}
