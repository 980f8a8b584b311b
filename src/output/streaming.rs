//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each tree line as
//! soon as the walker produces it, for use with `TreeWalker`.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use termcolor::{ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::tree::{StreamingOutput, TreeEntry, WalkSummary};

use super::config::OutputConfig;
use super::utils::{connector, entry_color, root_color, root_label};

/// Streaming output formatter over any `WriteColor` sink.
/// Implements the StreamingOutput trait for use with TreeWalker.
pub struct StreamingFormatter<W: WriteColor> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice), config)
    }
}

impl StreamingFormatter<NoColor<BufWriter<File>>> {
    /// Formatter writing to a file. Files never get color.
    pub fn file(file: File) -> Self {
        Self::new(NoColor::new(BufWriter::new(file)), OutputConfig::plain())
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write `text` in `spec`, or plain when color is off.
    fn write_styled(&mut self, text: &str, spec: &ColorSpec) -> io::Result<()> {
        if self.config.use_color {
            self.out.set_color(spec)?;
            write!(self.out, "{}", text)?;
            self.out.reset()?;
        } else {
            write!(self.out, "{}", text)?;
        }
        Ok(())
    }
}

impl<W: WriteColor> StreamingOutput for StreamingFormatter<W> {
    fn output_root(&mut self, name: &str) -> io::Result<()> {
        self.write_styled(&root_label(name), &root_color())?;
        writeln!(self.out)
    }

    fn output_entry(&mut self, entry: &TreeEntry, prefix: &str) -> io::Result<()> {
        write!(self.out, "{}{}", prefix, connector(entry.is_last))?;
        self.write_styled(&entry.label(), &entry_color(&entry.kind))?;
        writeln!(self.out)
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        self.out.flush()
    }
}
