//! Configuration file discovery and loading.

use crate::config::schema::GuardConfig;
use crate::error::{GuardError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project-relative location of the config file.
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".libguard").join("config.yml")
}

/// Load a single config file and parse it into GuardConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<GuardConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GuardError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GuardError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into GuardConfig.
///
/// An empty document yields the built-in recipe.
pub fn parse_config(content: &str, source_path: &Path) -> Result<GuardConfig> {
    if content.trim().is_empty() {
        return Ok(GuardConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| GuardError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the configuration for a project.
///
/// Resolution order:
/// 1. `explicit` path (`--config`); it must exist
/// 2. `<project>/.libguard/config.yml` if present
/// 3. The built-in recipe
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<GuardConfig> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_root.join(path)
        };
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(&path);
    }

    let discovered = project_config_path(project_root);
    if discovered.is_file() {
        tracing::debug!("Loading config from {}", discovered.display());
        load_config_file(&discovered)
    } else {
        tracing::debug!("No config file found, using built-in recipe");
        Ok(GuardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_project_config(temp: &TempDir, content: &str) {
        let dir = temp.path().join(".libguard");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), content).unwrap();
    }

    #[test]
    fn missing_project_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, GuardConfig::default());
    }

    #[test]
    fn discovers_project_config() {
        let temp = TempDir::new().unwrap();
        write_project_config(&temp, "name: zlib\nbuild: make -j4\n");

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.name, "zlib");
        assert_eq!(config.build, "make -j4");
    }

    #[test]
    fn explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let result = load_config(temp.path(), Some(Path::new("nope.yml")));
        assert!(matches!(result, Err(GuardError::ConfigNotFound { .. })));
    }

    #[test]
    fn explicit_relative_config_resolves_against_project() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("alt.yml"), "name: alt\n").unwrap();

        let config = load_config(temp.path(), Some(Path::new("alt.yml"))).unwrap();
        assert_eq!(config.name, "alt");
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let temp = TempDir::new().unwrap();
        write_project_config(&temp, "name: [unclosed\n");

        let err = load_config(temp.path(), None).unwrap_err();
        match err {
            GuardError::ConfigParseError { path, .. } => {
                assert!(path.ends_with(".libguard/config.yml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_file_is_default_recipe() {
        let config = parse_config("  \n", Path::new("config.yml")).unwrap();
        assert_eq!(config, GuardConfig::default());
    }
}
