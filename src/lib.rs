//! dirtree - render a directory hierarchy as an indented tree diagram

pub mod config;
pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ColorMode, Config};
pub use error::{ConfigError, ListError, Result, TreeError};
pub use output::{JsonReport, OutputConfig, StreamingFormatter, format_summary, print_json};
pub use tree::{
    CancelToken, Completion, Connectors, DirSource, FsSource, IndentStyle, LineKind, LineSink,
    RenderEvent, RenderWorker, Rendered, TraversalConfig, TraversalResult, TreeLine, TreeRenderer,
    resolve_root,
};
