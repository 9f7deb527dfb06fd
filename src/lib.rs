//! libguard - Build and install a vendored native library exactly once.
//!
//! libguard is a check-then-act installer. It looks for an installed
//! artifact (by default `/usr/local/lib/libta_lib.a`) and, only when it is
//! absent, unpacks a vendored source archive, patches a numeric constant,
//! configures, builds and installs it. The install step prefers an elevation
//! helper such as `sudo` and falls back to an unprivileged install.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Recipe configuration loading and validation
//! - [`error`] - Error types and result aliases
//! - [`guard`] - Artifact check and the install pipeline
//! - [`shell`] - Shell command execution and program lookup
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use libguard::guard::replace_literal;
//!
//! let (patched, count) = replace_literal(
//!     "#define TA_EPSILON (0.00000001)",
//!     "0.00000001",
//!     "0.000000000000000001",
//! );
//! assert_eq!(count, 1);
//! assert_eq!(patched, "#define TA_EPSILON (0.000000000000000001)");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod guard;
pub mod shell;
pub mod ui;

pub use error::{GuardError, Result};
