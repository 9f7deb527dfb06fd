//! Platform queries: privilege level and program lookup.

use std::path::{Path, PathBuf};

/// Check if running as root/admin.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}

/// Check whether a file has any execute bit set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a program by iterating over the given PATH entries.
///
/// Returns the first match that is a regular, executable file. Does not
/// shell out to `which`, whose behavior varies across systems.
pub fn resolve_program(program: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

/// Find a program on the current process `PATH`.
///
/// A value containing a path separator is checked directly instead.
pub fn find_program(program: &str) -> Option<PathBuf> {
    if program.contains(std::path::MAIN_SEPARATOR) {
        let path = PathBuf::from(program);
        return (path.is_file() && is_executable(&path)).then_some(path);
    }

    let path_var = std::env::var_os("PATH")?;
    let entries: Vec<PathBuf> = std::env::split_paths(&path_var).collect();
    resolve_program(program, &entries)
}
