//! Root-aware exclusion filtering for tree walking

use std::path::{Path, PathBuf};

use crate::patterns::ExclusionSet;

use super::utils::relative_posix_path;

/// Applies an `ExclusionSet` to absolute paths under a fixed root.
pub struct FileFilter {
    root: PathBuf,
    exclusions: ExclusionSet,
}

impl FileFilter {
    pub fn new(root: &Path, exclusions: ExclusionSet) -> Self {
        Self {
            root: root.to_path_buf(),
            exclusions,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check if `path` is excluded. Paths outside the root are never excluded.
    pub fn is_excluded(&self, path: &Path, is_dir: bool) -> bool {
        match relative_posix_path(path, &self.root) {
            Some(rel) => self.exclusions.is_excluded(&rel, is_dir),
            None => false,
        }
    }
}
