//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each tree line as
//! soon as the renderer produces it, for use with `TreeRenderer::render_to`.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{LineKind, LineSink, TraversalResult, TreeLine};

use super::config::OutputConfig;
use super::summary::format_summary;

/// Streaming output formatter - writes lines directly without buffering the tree.
pub struct StreamingFormatter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter writing to stdout. `use_color` is final; terminal detection
    /// has already happened by the time the config is built.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            out: StandardStream::stdout(choice),
            config,
        }
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn style(kind: LineKind) -> Option<ColorSpec> {
        match kind {
            LineKind::Root | LineKind::Directory => {
                Some(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true).clone())
            }
            LineKind::Error => Some(ColorSpec::new().set_fg(Some(Color::Red)).clone()),
            LineKind::File => None,
        }
    }
}

impl<W: WriteColor> LineSink for StreamingFormatter<W> {
    fn line(&mut self, line: TreeLine) -> io::Result<()> {
        write!(self.out, "{}{}", line.prefix, line.connector)?;
        match Self::style(line.kind) {
            Some(spec) => {
                self.out.set_color(&spec)?;
                write!(self.out, "{}", line.text)?;
                self.out.reset()?;
            }
            None => write!(self.out, "{}", line.text)?,
        }
        writeln!(self.out)
    }

    fn finish(&mut self, result: &TraversalResult) -> io::Result<()> {
        if self.config.report {
            writeln!(self.out)?;
            writeln!(self.out, "{}", format_summary(result, self.config.dirs_only))?;
        }
        self.out.flush()
    }
}
