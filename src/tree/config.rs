//! Configuration for a single render

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use super::connectors::Connectors;

/// Configuration for one traversal. Built fresh for every render.
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    /// Absolute path of the directory to render
    pub root: PathBuf,
    /// Descend at most this many levels; `Some(0)` shows only the root line
    pub max_depth: Option<usize>,
    pub show_hidden: bool,
    /// Omit non-directory entries from output and counts
    pub dirs_only: bool,
    /// Exact names excluded at every level
    pub ignore_names: BTreeSet<String>,
    pub connectors: Connectors,
}

impl TraversalConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: None,
            show_hidden: false,
            dirs_only: false,
            ignore_names: BTreeSet::new(),
            connectors: Connectors::default(),
        }
    }

    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_show_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    pub fn with_dirs_only(mut self, dirs_only: bool) -> Self {
        self.dirs_only = dirs_only;
        self
    }

    pub fn with_ignore_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_connectors(mut self, connectors: Connectors) -> Self {
        self.connectors = connectors;
        self
    }
}

/// Make `path` absolute against the current directory and drop `.` and `..`
/// components lexically. Symlinks are left unresolved.
pub fn resolve_root(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
