//! TreeWalker - depth-first walk that streams entries to an output sink

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::config::WalkerConfig;
use super::entry::{EntryKind, TreeEntry};
use super::filter::FileFilter;
use super::traversal::{TraversalContext, WalkSummary};
use super::utils::{child_prefix, display_name, is_package_dir, read_link_target};

/// Callback for streaming output - receives each line of the tree as it is found.
pub trait StreamingOutput {
    /// The header line for the root directory.
    fn output_root(&mut self, name: &str) -> io::Result<()>;

    /// One entry, drawn after `prefix`.
    fn output_entry(&mut self, entry: &TreeEntry, prefix: &str) -> io::Result<()>;

    fn finish(&mut self, summary: &WalkSummary) -> io::Result<()>;
}

/// A directory child that survived filtering.
struct Child {
    path: PathBuf,
    name: String,
    is_symlink: bool,
    /// Matched and descended as a directory. True for a symlink only when
    /// links are followed and it resolves to a directory.
    is_dir: bool,
}

/// Streaming tree walker. Memory use is O(depth) plus one directory listing
/// per level.
pub struct TreeWalker {
    config: WalkerConfig,
    filter: Option<FileFilter>,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            filter: None,
        }
    }

    /// Skip entries the filter excludes. The filter's root should be the walk root.
    pub fn with_filter(mut self, filter: FileFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Walk `root` and stream every line to `output`.
    ///
    /// Returns `Ok(None)` if `root` is not a directory. Only errors writing to
    /// `output` are returned; filesystem trouble inside the tree is rendered
    /// inline or logged.
    pub fn walk<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> io::Result<Option<WalkSummary>> {
        self.walk_named(root, &display_name(root), output)
    }

    /// Like `walk`, with `root_name` in the header line instead of the
    /// last component of `root`.
    pub fn walk_named<O: StreamingOutput>(
        &self,
        root: &Path,
        root_name: &str,
        output: &mut O,
    ) -> io::Result<Option<WalkSummary>> {
        if !root.is_dir() {
            return Ok(None);
        }

        output.output_root(root_name)?;

        let mut ctx = TraversalContext::new();
        self.walk_dir(root, "", &mut ctx, output)?;

        output.finish(&ctx.summary)?;
        Ok(Some(ctx.summary))
    }

    fn walk_dir<O: StreamingOutput>(
        &self,
        path: &Path,
        prefix: &str,
        ctx: &mut TraversalContext,
        output: &mut O,
    ) -> io::Result<()> {
        if !ctx.enter(path) {
            debug!("symlink loop at '{}'", path.display());
            ctx.summary.markers += 1;
            let entry = TreeEntry::new(display_name(path), EntryKind::SymlinkLoop, true);
            return output.output_entry(&entry, prefix);
        }

        let children = match self.read_children(path) {
            Ok(children) => children,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                debug!("permission denied listing '{}'", path.display());
                ctx.summary.markers += 1;
                let entry = TreeEntry::new(display_name(path), EntryKind::PermissionDenied, true);
                return output.output_entry(&entry, prefix);
            }
            Err(e) => {
                warn!("cannot list '{}': {}", path.display(), e);
                return Ok(());
            }
        };

        let total = children.len();
        for (i, child) in children.into_iter().enumerate() {
            let is_last = i + 1 == total;
            self.visit_child(child, prefix, is_last, ctx, output)?;
        }

        Ok(())
    }

    fn visit_child<O: StreamingOutput>(
        &self,
        child: Child,
        prefix: &str,
        is_last: bool,
        ctx: &mut TraversalContext,
        output: &mut O,
    ) -> io::Result<()> {
        let Child {
            path,
            name,
            is_symlink,
            is_dir,
        } = child;

        if is_symlink {
            let target = read_link_target(&path);
            output.output_entry(
                &TreeEntry::new(name, EntryKind::Symlink { target }, is_last),
                prefix,
            )?;
            ctx.summary.symlinks += 1;

            if is_dir {
                self.walk_dir(&path, &child_prefix(prefix, is_last), ctx, output)?;
            }
        } else if is_dir {
            let kind = if is_package_dir(&path, &self.config.package_marker) {
                EntryKind::Package
            } else {
                EntryKind::Directory
            };
            output.output_entry(&TreeEntry::new(name, kind, is_last), prefix)?;
            ctx.summary.directories += 1;

            self.walk_dir(&path, &child_prefix(prefix, is_last), ctx, output)?;
        } else {
            output.output_entry(&TreeEntry::new(name, EntryKind::File, is_last), prefix)?;
            ctx.summary.files += 1;
        }

        Ok(())
    }

    /// Read, sort, and filter the entries of one directory.
    fn read_children(&self, path: &Path) -> io::Result<Vec<Child>> {
        let mut entries: Vec<fs::DirEntry> = fs::read_dir(path)?
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!("skipping unreadable entry in '{}': {}", path.display(), err);
                    None
                }
            })
            .collect();
        entries.sort_by_key(|a| a.file_name());

        Ok(entries
            .into_iter()
            .map(|entry| {
                let file_type = entry.file_type().ok();
                let path = entry.path();
                let is_symlink = file_type.is_some_and(|t| t.is_symlink());
                // path.is_dir() follows the link; dangling and looping links fail it
                let is_dir = if is_symlink {
                    self.config.follow_symlinks && path.is_dir()
                } else {
                    file_type.is_some_and(|t| t.is_dir())
                };
                Child {
                    path,
                    name: entry.file_name().to_string_lossy().into_owned(),
                    is_symlink,
                    is_dir,
                }
            })
            .filter(|child| !self.is_excluded(child))
            .collect())
    }

    fn is_excluded(&self, child: &Child) -> bool {
        self.filter
            .as_ref()
            .is_some_and(|f| f.is_excluded(&child.path, child.is_dir))
    }
}
