//! Tree output
//!
//! - `streaming` - line-by-line text output, colored or plain
//! - `summary` - the totals line under the tree
//! - `json` - JSON document for a finished render

mod config;
mod json;
mod streaming;
mod summary;

pub use config::OutputConfig;
pub use json::{JsonReport, print_json, write_json};
pub use streaming::StreamingFormatter;
pub use summary::format_summary;
