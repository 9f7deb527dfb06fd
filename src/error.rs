//! Error types for libguard operations.
//!
//! This module defines [`GuardError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A failing pipeline stage is always a [`GuardError::StageFailed`] carrying
//!   the [`Stage`] that broke, so callers can report it without string matching
//! - Use `anyhow::Error` (via `GuardError::Other`) for unexpected errors
//! - "Already installed" is an [`Outcome`](crate::guard::Outcome), never an error

use std::path::PathBuf;
use thiserror::Error;

use crate::guard::Stage;

/// Core error type for libguard operations.
#[derive(Debug, Error)]
pub enum GuardError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A pipeline stage failed; the remaining stages were not run.
    #[error("{stage} stage failed: {message}")]
    StageFailed { stage: Stage, message: String },

    /// Shell command could not be started at all.
    #[error("could not start '{command}': {source}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GuardError {
    /// Build a stage failure.
    pub fn stage(stage: Stage, message: impl Into<String>) -> Self {
        Self::StageFailed {
            stage,
            message: message.into(),
        }
    }

    /// The stage that failed, if this error came from the pipeline.
    pub fn failed_stage(&self) -> Option<Stage> {
        match self {
            Self::StageFailed { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Whether this error is a configuration problem (exit code 2).
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
        )
    }
}

/// Result type alias for libguard operations.
pub type Result<T> = std::result::Result<T, GuardError>;
