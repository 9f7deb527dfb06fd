//! The installation guard.
//!
//! A guard is a check-then-act routine: if the artifact already exists
//! nothing happens, otherwise the library is extracted, patched, configured,
//! built and installed, stopping at the first failing [`Stage`].
//!
//! - [`ensure_installed`] - Run the guard
//! - [`plan`] - Describe what the guard would do
//! - [`check_artifact`] - Inspect the target path
//! - [`apply_patch`] - The numeric-literal patch stage
//! - [`resolve_install_attempts`] - Elevated-then-plain install strategy
//!
//! # Example
//!
//! ```
//! use libguard::config::GuardConfig;
//! use libguard::guard::{default_context, ensure_installed, Outcome, Recipe};
//! use libguard::ui::MockUI;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let target = temp.path().join("libta_lib.a");
//! fs::write(&target, b"!<arch>\n").unwrap();
//!
//! let recipe = Recipe::from_config(&GuardConfig::default(), temp.path())
//!     .with_target(target);
//! let mut ui = MockUI::new();
//!
//! let outcome = ensure_installed(&recipe, &default_context(), &mut ui).unwrap();
//! assert_eq!(outcome, Outcome::AlreadyInstalled);
//! ```

pub mod artifact;
pub mod context;
pub mod elevation;
pub mod patch;
pub mod pipeline;
pub mod recipe;
pub mod stage;

pub use artifact::{check_artifact, ArtifactStatus};
pub use context::{default_context, GuardContext};
pub use elevation::{resolve_install_attempts, InstallAttempt};
pub use patch::{apply_patch, replace_literal, replace_literal_bytes, PatchReport};
pub use pipeline::{ensure_installed, plan, PlannedStage};
pub use recipe::{shell_quote, Recipe};
pub use stage::{Outcome, Stage};
