//! Command-line interface for libguard.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ConfigArgs, EnsureArgs, StatusArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
