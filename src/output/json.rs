//! JSON output formatting

use std::io::{self, Write};

use serde::Serialize;

use crate::tree::Rendered;

/// A finished render as a JSON document.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub root: String,
    pub lines: Vec<String>,
    pub directories: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<usize>,
}

impl JsonReport {
    pub fn new(rendered: &Rendered, dirs_only: bool) -> Self {
        let result = rendered.result();
        Self {
            root: rendered
                .lines
                .first()
                .map(|l| l.text.clone())
                .unwrap_or_default(),
            lines: rendered.lines.iter().map(ToString::to_string).collect(),
            directories: result.directories,
            files: if dirs_only { None } else { Some(result.files) },
        }
    }
}

/// Write the report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(mut writer: W, report: &JsonReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, report).map_err(io::Error::other)?;
    writeln!(writer)?;
    Ok(())
}

/// Print the report as pretty-printed JSON to stdout.
pub fn print_json(report: &JsonReport) -> io::Result<()> {
    write_json(io::stdout().lock(), report)
}
