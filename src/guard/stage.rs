//! Pipeline stages and guard outcomes.

use serde::Serialize;
use std::fmt;

/// One step of the build-and-install pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Unpack the bundled source archive.
    Extract,
    /// Rewrite the numeric literal in the vendored source.
    Patch,
    /// Run the library's configure script.
    Configure,
    /// Compile.
    Build,
    /// Copy the artifact into place.
    Install,
}

impl Stage {
    /// All stages in the order they run.
    pub const ALL: [Stage; 5] = [
        Stage::Extract,
        Stage::Patch,
        Stage::Configure,
        Stage::Build,
        Stage::Install,
    ];

    /// Lowercase stage name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Extract => "extract",
            Stage::Patch => "patch",
            Stage::Configure => "configure",
            Stage::Build => "build",
            Stage::Install => "install",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful result of [`ensure_installed`](crate::guard::ensure_installed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The artifact was already present; nothing ran.
    AlreadyInstalled,
    /// Every stage ran and the artifact is now present.
    Installed,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::AlreadyInstalled => f.write_str("already installed"),
            Outcome::Installed => f.write_str("installed"),
        }
    }
}
