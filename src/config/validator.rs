//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - target and archive must be set
//! - every stage command must be non-empty
//! - the patch must swap one numeric literal for a different one

use crate::config::schema::GuardConfig;
use crate::error::{GuardError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Decimal or exponent-form literal, optionally signed.
static NUMERIC_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").expect("valid numeric regex")
});

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &GuardConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_paths(config));
    errors.extend(validate_commands(config));
    errors.extend(validate_patch(config));

    errors
}

/// Validate and convert any errors into a single `ConfigValidationError`.
pub fn validate(config: &GuardConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| format!("[{}] {}", e.rule, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(GuardError::ConfigValidationError { message })
}

fn validate_paths(config: &GuardConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.target.as_os_str().is_empty() {
        errors.push(ValidationError::new("missing-target", "'target' must be set"));
    }
    if config.archive.as_os_str().is_empty() {
        errors.push(ValidationError::new("missing-archive", "'archive' must be set"));
    }

    errors
}

fn validate_commands(config: &GuardConfig) -> Vec<ValidationError> {
    [
        ("extract", &config.extract),
        ("configure", &config.configure),
        ("build", &config.build),
        ("install.command", &config.install.command),
    ]
    .into_iter()
    .filter(|(_, cmd)| cmd.trim().is_empty())
    .map(|(field, _)| {
        ValidationError::new("empty-command", format!("'{}' must not be empty", field))
    })
    .collect()
}

fn validate_patch(config: &GuardConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let Some(patch) = &config.patch else {
        return errors;
    };

    if patch.file.as_os_str().is_empty() {
        errors.push(ValidationError::new("patch-file", "'patch.file' must be set"));
    }

    for (field, literal) in [("patch.find", &patch.find), ("patch.replace", &patch.replace)] {
        // Matched verbatim by the patch stage, so surrounding whitespace counts.
        if !NUMERIC_LITERAL.is_match(literal) {
            errors.push(ValidationError::new(
                "patch-literal",
                format!("'{}' must be a numeric literal, got '{}'", field, literal),
            ));
        }
    }

    if patch.find == patch.replace {
        errors.push(ValidationError::new(
            "patch-noop",
            "'patch.find' and 'patch.replace' are identical",
        ));
    }

    errors
}
