//! Entries produced by the walker, one per printed line

/// Label used when a symlink target cannot be read.
pub const UNREACHABLE_TARGET: &str = "unreachable";

/// What a printed entry is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Directory containing the package marker file
    Package,
    Symlink {
        target: Option<String>,
    },
    /// Directory already visited earlier in this walk
    SymlinkLoop,
    /// Directory that could not be listed
    PermissionDenied,
}

impl EntryKind {
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory | EntryKind::Package)
    }

    /// Markers stand in for a failed or refused listing.
    pub fn is_marker(&self) -> bool {
        matches!(self, EntryKind::SymlinkLoop | EntryKind::PermissionDenied)
    }
}

/// One line of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub kind: EntryKind,
    pub is_last: bool,
}

impl TreeEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind, is_last: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            is_last,
        }
    }

    /// Text shown after the connector.
    pub fn label(&self) -> String {
        match &self.kind {
            EntryKind::File => self.name.clone(),
            EntryKind::Directory | EntryKind::Package => format!("{}/", self.name),
            EntryKind::Symlink { target } => format!(
                "{}@ -> {}",
                self.name,
                target.as_deref().unwrap_or(UNREACHABLE_TARGET)
            ),
            EntryKind::SymlinkLoop => format!("{}/ (symlink loop)", self.name),
            EntryKind::PermissionDenied => "Permission Denied".to_string(),
        }
    }
}
