//! Output configuration types

/// Configuration for output formatting.
///
/// Resolved once before the walk starts; the formatter never inspects the
/// terminal itself.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    pub fn plain() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_color: true }
    }
}

/// Decide whether output gets color.
///
/// `no_color` is whether `NO_COLOR` is set (https://no-color.org/), `term` the
/// value of `TERM`, `is_terminal` whether stdout is a tty. Files never get color.
pub fn resolve_color(to_file: bool, no_color: bool, term: Option<&str>, is_terminal: bool) -> bool {
    if to_file || no_color {
        return false;
    }
    if term == Some("dumb") {
        return false;
    }
    is_terminal
}
