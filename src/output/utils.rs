//! Connectors and colors shared by the formatters

use termcolor::{Color, ColorSpec};

use crate::tree::EntryKind;

pub const MIDDLE_CONNECTOR: &str = "├── ";
pub const LAST_CONNECTOR: &str = "└── ";

/// Connector drawn in front of an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_CONNECTOR } else { MIDDLE_CONNECTOR }
}

/// Color for an entry's label.
pub fn entry_color(kind: &EntryKind) -> ColorSpec {
    let color = match kind {
        EntryKind::File => Color::Green,
        EntryKind::Directory => Color::Cyan,
        EntryKind::Package => Color::Blue,
        EntryKind::Symlink { .. } | EntryKind::SymlinkLoop => Color::Magenta,
        EntryKind::PermissionDenied => Color::Red,
    };
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color));
    spec
}

/// Color for the root header line.
pub fn root_color() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Blue)).set_bold(true);
    spec
}

/// Root header text: the directory name with a single trailing slash.
pub fn root_label(name: &str) -> String {
    if name.ends_with('/') {
        name.to_string()
    } else {
        format!("{}/", name)
    }
}
