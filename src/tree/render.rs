//! TreeRenderer - depth-first, sorted traversal that draws the tree

use std::io;
use std::ops::ControlFlow;
use std::path::Path;

use crate::error::{Result, TreeError};

use super::cancel::CancelToken;
use super::config::TraversalConfig;
use super::filter::EntryFilter;
use super::line::{Completion, Rendered, TraversalResult, TreeLine};
use super::source::{DirSource, FsSource};

/// Receives lines as the renderer produces them.
pub trait LineSink {
    fn line(&mut self, line: TreeLine) -> io::Result<()>;

    /// Called once after a traversal that was not cancelled.
    fn finish(&mut self, _result: &TraversalResult) -> io::Result<()> {
        Ok(())
    }
}

impl LineSink for Vec<TreeLine> {
    fn line(&mut self, line: TreeLine) -> io::Result<()> {
        self.push(line);
        Ok(())
    }
}

/// Per-frame drawing state.
#[derive(Debug, Clone)]
struct DrawState {
    prefix: String,
    depth: usize,
}

impl DrawState {
    fn root() -> Self {
        Self {
            prefix: String::new(),
            depth: 0,
        }
    }

    fn descend(&self, continuation: &str) -> Self {
        Self {
            prefix: format!("{}{}", self.prefix, continuation),
            depth: self.depth + 1,
        }
    }
}

type Walk = ControlFlow<TraversalResult, TraversalResult>;

/// Renders a directory hierarchy as tree lines plus totals.
pub struct TreeRenderer<S = FsSource> {
    config: TraversalConfig,
    source: S,
    cancel: CancelToken,
}

impl TreeRenderer<FsSource> {
    pub fn new(config: TraversalConfig) -> Self {
        Self {
            config,
            source: FsSource,
            cancel: CancelToken::new(),
        }
    }
}

impl<S: DirSource> TreeRenderer<S> {
    /// Read directories from `source` instead of the real filesystem.
    pub fn with_source<T: DirSource>(self, source: T) -> TreeRenderer<T> {
        TreeRenderer {
            config: self.config,
            source,
            cancel: self.cancel,
        }
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Render the whole tree into memory.
    pub fn render(&self) -> Result<Rendered> {
        let mut lines = Vec::new();
        let completion = self.render_to(&mut lines)?;
        Ok(Rendered { lines, completion })
    }

    /// Stream lines into `out` as they are produced.
    ///
    /// Fails only when the root is not a directory or `out` fails to write.
    /// Unreadable directories below the root become placeholder lines.
    pub fn render_to<O: LineSink + ?Sized>(&self, out: &mut O) -> Result<Completion> {
        let root = &self.config.root;
        if !self.source.is_dir(root) {
            return Err(TreeError::InvalidRoot(root.clone()));
        }

        if self.cancel.is_cancelled() {
            return Ok(Completion::Cancelled(TraversalResult::default()));
        }

        let name = root_name(root);
        out.line(TreeLine::root(name.clone()))?;

        let filter = EntryFilter::new(&self.config);
        match self.walk_dir(root, &name, &DrawState::root(), &filter, out)? {
            ControlFlow::Continue(result) => {
                out.finish(&result)?;
                Ok(Completion::Complete(result))
            }
            ControlFlow::Break(partial) => {
                tracing::debug!(root = %root.display(), "render cancelled");
                Ok(Completion::Cancelled(partial))
            }
        }
    }

    fn walk_dir<O: LineSink + ?Sized>(
        &self,
        dir: &Path,
        dir_name: &str,
        state: &DrawState,
        filter: &EntryFilter<'_>,
        out: &mut O,
    ) -> io::Result<Walk> {
        let mut totals = TraversalResult::default();

        if self.cancel.is_cancelled() {
            return Ok(ControlFlow::Break(totals));
        }

        if self.config.max_depth.is_some_and(|max| state.depth >= max) {
            return Ok(ControlFlow::Continue(totals));
        }

        tracing::trace!(path = %dir.display(), depth = state.depth, "reading directory");
        let names = match self.source.list_children(dir) {
            Ok(names) => filter.apply(names),
            Err(err) => {
                tracing::debug!(path = %dir.display(), error = %err, "cannot list directory");
                if self.cancel.is_cancelled() {
                    return Ok(ControlFlow::Break(totals));
                }
                out.line(TreeLine::error(
                    &state.prefix,
                    self.config.connectors.last,
                    err.placeholder(dir_name),
                ))?;
                return Ok(ControlFlow::Continue(totals));
            }
        };

        // "Last" is decided against the filtered list before dirs_only drops
        // files, so a directory followed only by files keeps the middle connector.
        let last_index = names.len().saturating_sub(1);

        for (i, name) in names.iter().enumerate() {
            let is_last = i == last_index;
            let path = dir.join(name);
            let is_dir = self.source.is_dir(&path);

            if self.config.dirs_only && !is_dir {
                continue;
            }

            if self.cancel.is_cancelled() {
                return Ok(ControlFlow::Break(totals));
            }

            let display = name.to_string_lossy().into_owned();
            let connector = self.config.connectors.connector(is_last);
            out.line(TreeLine::entry(&state.prefix, connector, display.clone(), is_dir))?;

            if is_dir {
                totals.directories += 1;
                let child = state.descend(self.config.connectors.continuation(is_last));
                match self.walk_dir(&path, &display, &child, filter, out)? {
                    ControlFlow::Continue(sub) => totals += sub,
                    ControlFlow::Break(sub) => {
                        totals += sub;
                        return Ok(ControlFlow::Break(totals));
                    }
                }
            } else {
                totals.files += 1;
            }
        }

        Ok(ControlFlow::Continue(totals))
    }
}

/// Base name of the root, or the whole path when it has none (e.g. `/`).
fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}
