//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads and
//! validates the configuration once and routes the subcommand to its
//! implementation. Running `libguard` with no subcommand is `libguard ensure`.

pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod ensure;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
