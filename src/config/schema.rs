//! Configuration schema definitions for libguard.
//!
//! This module contains the struct definitions that map to the
//! `.libguard/config.yml` file format. Every field has a default, so a
//! file only needs to name what differs from the built-in TA-Lib recipe.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default artifact location for the built-in recipe.
pub const DEFAULT_TARGET: &str = "/usr/local/lib/libta_lib.a";

/// Root configuration structure for config.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Library name (for display purposes)
    pub name: String,

    /// Installed artifact whose presence means "done"
    pub target: PathBuf,

    /// Bundled source archive (relative to the project root)
    pub archive: PathBuf,

    /// Directory the archive unpacks to, relative to `work_dir`
    pub source_dir: PathBuf,

    /// Directory to extract and build in (relative to the project root)
    pub work_dir: PathBuf,

    /// Extraction command; `{archive}` and `{work_dir}` are substituted
    pub extract: String,

    /// Source patch applied after extraction (`null` disables it)
    pub patch: Option<PatchConfig>,

    /// Configuration step, run inside the source directory
    pub configure: String,

    /// Build step, run inside the source directory
    pub build: String,

    /// Install step
    pub install: InstallConfig,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            name: "ta-lib".to_string(),
            target: PathBuf::from(DEFAULT_TARGET),
            archive: PathBuf::from("ta-lib-0.4.0-src.tar.gz"),
            source_dir: PathBuf::from("ta-lib"),
            work_dir: PathBuf::from("."),
            extract: "tar -xzf {archive} -C {work_dir}".to_string(),
            patch: Some(PatchConfig::default()),
            configure: "./configure".to_string(),
            build: "make".to_string(),
            install: InstallConfig::default(),
        }
    }
}

/// A single numeric-literal replacement in one source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    /// File to patch, relative to the extracted source directory
    pub file: PathBuf,

    /// Literal to look for
    pub find: String,

    /// Replacement literal
    pub replace: String,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("src/ta_func/ta_utility.h"),
            find: "0.00000001".to_string(),
            replace: "0.000000000000000001".to_string(),
        }
    }
}

/// Install step with optional privilege elevation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Install command, run inside the source directory
    pub command: String,

    /// Elevation helper tried first (`null` never elevates)
    pub elevation: Option<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            command: "make install".to_string(),
            elevation: Some("sudo".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_recipe_targets_ta_lib() {
        let config = GuardConfig::default();
        assert_eq!(config.target, PathBuf::from("/usr/local/lib/libta_lib.a"));
        assert_eq!(config.source_dir, PathBuf::from("ta-lib"));
        assert_eq!(config.install.elevation.as_deref(), Some("sudo"));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: GuardConfig = serde_yaml::from_str("target: /tmp/lib/libfoo.a\n").unwrap();
        assert_eq!(config.target, PathBuf::from("/tmp/lib/libfoo.a"));
        assert_eq!(config.build, "make");
        assert_eq!(config.patch, Some(PatchConfig::default()));
    }

    #[test]
    fn null_patch_disables_it() {
        let config: GuardConfig = serde_yaml::from_str("patch: null\n").unwrap();
        assert!(config.patch.is_none());
    }

    #[test]
    fn null_elevation_disables_it() {
        let yaml = "install:\n  command: make install-strip\n  elevation: null\n";
        let config: GuardConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.install.command, "make install-strip");
        assert!(config.install.elevation.is_none());
    }

    #[test]
    fn serializes_to_yaml_and_back() {
        let config = GuardConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("ta_utility.h"));
        let parsed: GuardConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
