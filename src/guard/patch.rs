//! Numeric-literal source patch.
//!
//! Replaces every occurrence of one numeric literal in one source file. A
//! match only counts when it is a whole literal: `0.00000001` does not match
//! inside `10.00000001`, `0.000000015` or `0.00000001e3`, but does match in
//! `0.00000001f` or `(0.00000001)`.
//!
//! The file is handled as raw bytes, so vendored sources in Latin-1 or any
//! other encoding are patched without being re-encoded. The original file is
//! kept next to the patched one with a `.bak` suffix.

use crate::config::PatchConfig;
use crate::error::{GuardError, Result};
use crate::guard::Stage;
use std::fs;
use std::path::{Path, PathBuf};

/// What a successful patch changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    /// File that was rewritten.
    pub file: PathBuf,
    /// Copy of the unpatched file.
    pub backup: PathBuf,
    /// Number of literals replaced.
    pub replacements: usize,
}

/// Apply `patch` to a file under `source_root`.
///
/// # Errors
///
/// `StageFailed { stage: Patch, .. }` when the file is missing or unreadable,
/// when the literal does not occur, or when writing fails.
pub fn apply_patch(patch: &PatchConfig, source_root: &Path) -> Result<PatchReport> {
    let file = source_root.join(&patch.file);

    let original = fs::read(&file).map_err(|e| {
        GuardError::stage(
            Stage::Patch,
            format!("cannot read {}: {}", file.display(), e),
        )
    })?;

    let (patched, replacements) =
        replace_literal_bytes(&original, patch.find.as_bytes(), patch.replace.as_bytes());
    if replacements == 0 {
        return Err(GuardError::stage(
            Stage::Patch,
            format!("literal '{}' not found in {}", patch.find, file.display()),
        ));
    }

    let backup = backup_path(&file);
    fs::write(&backup, &original).map_err(|e| {
        GuardError::stage(
            Stage::Patch,
            format!("cannot write {}: {}", backup.display(), e),
        )
    })?;
    fs::write(&file, patched).map_err(|e| {
        GuardError::stage(
            Stage::Patch,
            format!("cannot write {}: {}", file.display(), e),
        )
    })?;

    tracing::debug!(
        "Patched {} ({} replacement(s) of '{}')",
        file.display(),
        replacements,
        patch.find
    );

    Ok(PatchReport {
        file,
        backup,
        replacements,
    })
}

/// Replace whole-literal occurrences of `find`, returning the new text and count.
pub fn replace_literal(text: &str, find: &str, replace: &str) -> (String, usize) {
    let (bytes, count) =
        replace_literal_bytes(text.as_bytes(), find.as_bytes(), replace.as_bytes());
    // Splicing UTF-8 into UTF-8 at UTF-8 match boundaries stays valid.
    (String::from_utf8_lossy(&bytes).into_owned(), count)
}

/// Byte-level core of [`replace_literal`].
pub fn replace_literal_bytes(text: &[u8], find: &[u8], replace: &[u8]) -> (Vec<u8>, usize) {
    if find.is_empty() {
        return (text.to_vec(), 0);
    }

    let mut out = Vec::with_capacity(text.len());
    let mut pos = 0;
    let mut count = 0;

    while pos < text.len() {
        let end = pos + find.len();
        if text[pos..].starts_with(find) && is_literal_boundary(text, pos, end) {
            out.extend_from_slice(replace);
            pos = end;
            count += 1;
        } else {
            out.push(text[pos]);
            pos += 1;
        }
    }

    (out, count)
}

fn is_literal_boundary(text: &[u8], start: usize, end: usize) -> bool {
    let before = start.checked_sub(1).map(|i| text[i]);
    let after = text.get(end).copied();

    let before_ok = before.is_none_or(|b| !(b.is_ascii_alphanumeric() || b == b'.' || b == b'_'));
    let after_ok = after.is_none_or(|b| !(b.is_ascii_digit() || b == b'e' || b == b'E'));

    before_ok && after_ok
}

fn backup_path(file: &Path) -> PathBuf {
    let mut name = file.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}
