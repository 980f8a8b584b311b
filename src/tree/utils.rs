//! Shared utility functions for tree walking

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Continuation prefix below an entry drawn with the "last" connector.
pub const LAST_CONTINUATION: &str = "    ";
/// Continuation prefix below an entry that has later siblings.
pub const MIDDLE_CONTINUATION: &str = "│   ";

/// Path of `path` relative to `root`, joined with `/` on every platform.
/// Returns `None` if `path` is not under `root`.
pub fn relative_posix_path(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}

/// Display name of a path, falling back to the full path for `/` and the like.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Absolute form of `path` with `.` and `..` removed lexically, without
/// resolving symlinks.
pub fn lexical_absolute(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

/// Calculate the prefix for child entries.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, LAST_CONTINUATION)
    } else {
        format!("{}{}", current_prefix, MIDDLE_CONTINUATION)
    }
}

/// Check if `dir` directly contains an entry named `marker`.
pub fn is_package_dir(dir: &Path, marker: &str) -> bool {
    if marker.is_empty() {
        return false;
    }
    fs::symlink_metadata(dir.join(OsStr::new(marker))).is_ok()
}

/// Raw target of a symlink, as stored in the link. `None` if unreadable.
pub fn read_link_target(path: &Path) -> Option<String> {
    fs::read_link(path)
        .ok()
        .map(|target| target.to_string_lossy().into_owned())
}
