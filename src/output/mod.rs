//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `utils` - Connectors, labels and colors
//! - `streaming` - Streaming formatter for stdout or a file

mod config;
mod streaming;
mod utils;

// Re-export public types and functions
pub use config::{OutputConfig, resolve_color};
pub use streaming::StreamingFormatter;
pub use utils::{LAST_CONNECTOR, MIDDLE_CONNECTOR, connector, entry_color, root_label};
