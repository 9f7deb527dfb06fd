//! Configuration loading, parsing, and validation for libguard.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use libguard::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".libguard");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "name: ta-lib\nbuild: make -j2").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.build, "make -j2");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_file, parse_config, project_config_path};
pub use schema::{GuardConfig, InstallConfig, PatchConfig, DEFAULT_TARGET};
pub use validator::{validate, validate_config, ValidationError};
