//! A configuration resolved against a project root.

use crate::config::{GuardConfig, InstallConfig, PatchConfig};
use std::path::{Path, PathBuf};

/// Everything the guard needs, with all paths made absolute.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    /// Library name (for display).
    pub name: String,
    /// Artifact whose presence means the library is installed.
    pub target: PathBuf,
    /// Bundled source archive.
    pub archive: PathBuf,
    /// Directory the archive is extracted into.
    pub work_dir: PathBuf,
    /// Extracted source tree; configure, build and install run here.
    pub source_root: PathBuf,
    /// Extraction command with placeholders filled in.
    pub extract: String,
    /// Optional numeric-literal patch.
    pub patch: Option<PatchConfig>,
    /// Configure command.
    pub configure: String,
    /// Build command.
    pub build: String,
    /// Install command and elevation helper.
    pub install: InstallConfig,
}

impl Recipe {
    /// Resolve relative paths in `config` against `project_root`.
    pub fn from_config(config: &GuardConfig, project_root: &Path) -> Self {
        let archive = resolve(project_root, &config.archive);
        let work_dir = resolve(project_root, &config.work_dir);
        let source_root = work_dir.join(&config.source_dir);
        let extract = config
            .extract
            .replace("{archive}", &shell_quote(&archive.to_string_lossy()))
            .replace("{work_dir}", &shell_quote(&work_dir.to_string_lossy()));

        Self {
            name: config.name.clone(),
            target: resolve(project_root, &config.target),
            archive,
            work_dir,
            source_root,
            extract,
            patch: config.patch.clone(),
            configure: config.configure.clone(),
            build: config.build.clone(),
            install: config.install.clone(),
        }
    }

    /// Override the target artifact path.
    pub fn with_target(mut self, target: PathBuf) -> Self {
        self.target = target;
        self
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.as_os_str().is_empty() || path == Path::new(".") {
        root.to_path_buf()
    } else if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Quote a value for `sh`. Plain words are left alone.
pub fn shell_quote(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | '+' | ':'));
    if plain {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', "'\\''"))
    }
}
