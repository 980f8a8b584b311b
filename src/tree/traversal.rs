//! Per-walk traversal state.
//!
//! One `TraversalContext` is created for each top-level walk and dropped when
//! it returns, so walks never share the visited set.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Counts of what one walk printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
    pub symlinks: usize,
    /// Symlink loop and permission denied markers
    pub markers: usize,
}

/// Mutable state threaded through one recursive walk.
#[derive(Debug, Default)]
pub struct TraversalContext {
    visited: HashSet<PathBuf>,
    pub summary: WalkSummary,
}

impl TraversalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `dir` as visited by its canonical path.
    ///
    /// Returns false if that canonical path was already visited in this walk.
    /// A directory that cannot be canonicalized is tracked by the path given.
    pub fn enter(&mut self, dir: &Path) -> bool {
        let real = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        self.visited.insert(real)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
