//! Cross-platform path utilities for ghopen
//!
//! Repository-relative paths end up inside URLs, so they always use forward
//! slashes regardless of the host platform.

use normpath::PathExt;
use std::path::{Path, PathBuf};

use crate::error::{GhopenError, Result};

/// Convert a path to a string with forward slashes.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use ghopen::path_utils::to_forward_slashes;
///
/// assert_eq!(to_forward_slashes(Path::new("src\\lib.rs")), "src/lib.rs");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Resolve `target` to a path relative to `working_root`.
///
/// Strips the root prefix, converts separators to `/` and trims leading and
/// trailing slashes. `.` and `..` segments are not resolved; callers pass an
/// already-resolved absolute path.
///
/// # Errors
///
/// Returns [`GhopenError::PathOutsideRepository`] when `target` does not live
/// under `working_root`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use ghopen::path_utils::resolve_relative_path;
///
/// let relative = resolve_relative_path(Path::new("/repo"), Path::new("/repo/src/a.txt")).unwrap();
/// assert_eq!(relative, "src/a.txt");
/// ```
pub fn resolve_relative_path(working_root: &Path, target: &Path) -> Result<String> {
    let relative = target
        .strip_prefix(working_root)
        .map_err(|_| GhopenError::PathOutsideRepository {
            path: target.display().to_string(),
            root: working_root.display().to_string(),
        })?;

    Ok(to_forward_slashes(relative).trim_matches('/').to_string())
}

/// Turn a user-supplied path into an absolute one comparable with a
/// repository's working root.
///
/// Relative paths are joined onto `cwd`. Only the parent directory is
/// normalized (symlinks resolved, e.g. macOS /var -> /private/var); the file
/// name is kept as given, so a symlinked file still names itself rather than
/// the file it points to.
pub fn normalize_target(path: &Path, cwd: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(file_name)) => normalize_existing_prefix(parent).join(file_name),
        _ => normalize_existing_prefix(&absolute),
    }
}

/// Normalize the longest existing ancestor of `path` and append the
/// non-existent components back unchanged.
fn normalize_existing_prefix(path: &Path) -> PathBuf {
    if let Ok(norm) = path.normalize() {
        return norm.into_path_buf();
    }

    let mut current = path;
    let mut components = Vec::new();
    while !current.exists() {
        match (current.file_name(), current.parent()) {
            (Some(file_name), Some(parent)) => {
                components.push(file_name);
                current = parent;
            }
            _ => return path.to_path_buf(),
        }
    }

    let mut result = current
        .normalize()
        .map(|norm| norm.into_path_buf())
        .unwrap_or_else(|_| current.to_path_buf());
    for component in components.iter().rev() {
        result.push(component);
    }
    result
}
