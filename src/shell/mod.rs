//! Shell command execution and platform lookups.

pub mod command;
pub mod platform;

pub use command::{execute, execute_inherited, CommandOptions, CommandResult};
pub use platform::{find_program, is_elevated, is_executable, resolve_program};
