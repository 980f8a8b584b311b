//! gentree - print a directory tree, skipping what .gitignore and .treeignore exclude

pub mod output;
pub mod patterns;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use output::{OutputConfig, StreamingFormatter, resolve_color};
pub use patterns::{DEFAULT_IGNORE_PATTERNS, ExclusionSet, IGNORE_FILE_NAMES, ignore_files_for};
pub use tree::{
    EntryKind, FileFilter, StreamingOutput, TreeEntry, TreeWalker, WalkSummary, WalkerConfig,
};
