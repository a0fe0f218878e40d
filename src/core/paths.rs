//! Path helpers
//!
//! Paths shown to the user use '/' as separator and are relative to the
//! project root when possible.

use std::path::Path;

/// Normalize a path to use '/' as separator
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Relative path for display, falling back to the full path
pub fn display_path(path: &Path, root: &Path) -> String {
    match make_relative(path, root) {
        Some(rel) if !rel.is_empty() => rel,
        _ => normalize_path(path),
    }
}
