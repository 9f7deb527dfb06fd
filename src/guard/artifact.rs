//! Existence check for the installed artifact.

use serde::Serialize;
use std::path::Path;

/// What sits at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactStatus {
    /// A regular file (or a symlink to one).
    Present,
    /// Nothing.
    Missing,
    /// Something that is not a regular file, e.g. a directory.
    NotAFile,
}

impl ArtifactStatus {
    /// Whether the guard's postcondition holds.
    pub fn is_installed(&self) -> bool {
        matches!(self, ArtifactStatus::Present)
    }
}

/// Inspect the target path. Symlinks are followed.
pub fn check_artifact(path: &Path) -> ArtifactStatus {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => ArtifactStatus::Present,
        Ok(_) => ArtifactStatus::NotAFile,
        Err(_) => ArtifactStatus::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn regular_file_is_present() {
        let temp = TempDir::new().unwrap();
        let lib = temp.path().join("libta_lib.a");
        fs::write(&lib, b"!<arch>\n").unwrap();
        assert_eq!(check_artifact(&lib), ArtifactStatus::Present);
        assert!(check_artifact(&lib).is_installed());
    }

    #[test]
    fn absent_path_is_missing() {
        let temp = TempDir::new().unwrap();
        let status = check_artifact(&temp.path().join("libta_lib.a"));
        assert_eq!(status, ArtifactStatus::Missing);
        assert!(!status.is_installed());
    }

    #[test]
    fn directory_is_not_a_file() {
        let temp = TempDir::new().unwrap();
        assert_eq!(check_artifact(temp.path()), ArtifactStatus::NotAFile);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_file_is_present() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("libta_lib.a.0");
        fs::write(&real, b"x").unwrap();
        let link = temp.path().join("libta_lib.a");
        std::os::unix::fs::symlink(&real, &link).unwrap();
        assert_eq!(check_artifact(&link), ArtifactStatus::Present);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_missing() {
        let temp = TempDir::new().unwrap();
        let link = temp.path().join("libta_lib.a");
        std::os::unix::fs::symlink(temp.path().join("gone"), &link).unwrap();
        assert_eq!(check_artifact(&link), ArtifactStatus::Missing);
    }
}
