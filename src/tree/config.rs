//! Configuration types for the tree walker

/// Marker file that makes a directory render as a package.
pub const DEFAULT_PACKAGE_MARKER: &str = "__init__.py";

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// A directory directly containing a file with this name is a package.
    pub package_marker: String,
    /// Descend into symlinks that resolve to directories.
    /// Off by default: symlinks are printed with their target and left alone.
    pub follow_symlinks: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            package_marker: DEFAULT_PACKAGE_MARKER.to_string(),
            follow_symlinks: false,
        }
    }
}
