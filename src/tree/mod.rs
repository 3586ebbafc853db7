//! Directory tree rendering
//!
//! `TreeRenderer` walks a directory depth-first, in byte order, and produces
//! one `TreeLine` per entry plus directory/file totals. It can run:
//!
//! - in batch: `TreeRenderer::render` collects every line into memory
//! - streaming: `TreeRenderer::render_to` hands lines to a `LineSink` as they are drawn
//! - on a worker thread: `RenderWorker` streams `RenderEvent`s over a channel

mod cancel;
mod config;
mod connectors;
mod filter;
mod line;
mod render;
mod source;
mod worker;

pub use cancel::CancelToken;
pub use config::{TraversalConfig, resolve_root};
pub use connectors::{Connectors, IndentStyle};
pub use filter::EntryFilter;
pub use line::{Completion, LineKind, Rendered, TraversalResult, TreeLine};
pub use render::{LineSink, TreeRenderer};
pub use source::{DirSource, FsSource};
pub use worker::{RenderEvent, RenderWorker};
