//! Directory tree walking logic
//!
//! `TreeWalker` visits a directory depth-first in sorted order and streams
//! one `TreeEntry` per line to a `StreamingOutput`, so memory use stays
//! O(depth) however large the tree is.

mod config;
mod entry;
mod filter;
mod traversal;
mod utils;
mod walker;

// Re-export public types
pub use config::{DEFAULT_PACKAGE_MARKER, WalkerConfig};
pub use entry::{EntryKind, TreeEntry, UNREACHABLE_TARGET};
pub use filter::FileFilter;
pub use traversal::{TraversalContext, WalkSummary};
pub use utils::{
    LAST_CONTINUATION, MIDDLE_CONTINUATION, child_prefix, display_name, lexical_absolute,
    relative_posix_path,
};
pub use walker::{StreamingOutput, TreeWalker};
