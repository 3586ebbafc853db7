//! Rendered lines and traversal totals

use std::fmt;
use std::ops::AddAssign;

use serde::Serialize;

/// What a rendered line stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Root,
    Directory,
    File,
    /// Placeholder for a directory whose children could not be listed
    Error,
}

/// One line of the tree diagram: `prefix + connector + text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub prefix: String,
    pub connector: &'static str,
    pub text: String,
    pub kind: LineKind,
}

impl TreeLine {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            prefix: String::new(),
            connector: "",
            text: name.into(),
            kind: LineKind::Root,
        }
    }

    pub fn entry(prefix: &str, connector: &'static str, name: String, is_dir: bool) -> Self {
        Self {
            prefix: prefix.to_string(),
            connector,
            text: name,
            kind: if is_dir {
                LineKind::Directory
            } else {
                LineKind::File
            },
        }
    }

    pub fn error(prefix: &str, connector: &'static str, placeholder: String) -> Self {
        Self {
            prefix: prefix.to_string(),
            connector,
            text: placeholder,
            kind: LineKind::Error,
        }
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.connector, self.text)
    }
}

/// Directory and file totals for the entries that passed the filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalResult {
    pub directories: usize,
    pub files: usize,
}

impl AddAssign for TraversalResult {
    fn add_assign(&mut self, rhs: Self) {
        self.directories += rhs.directories;
        self.files += rhs.files;
    }
}

/// How a render ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Complete(TraversalResult),
    /// Stopped early on request. The totals are partial and should be discarded.
    Cancelled(TraversalResult),
}

impl Completion {
    pub fn result(&self) -> TraversalResult {
        match self {
            Completion::Complete(r) | Completion::Cancelled(r) => *r,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Completion::Cancelled(_))
    }
}

/// Output of a batch render.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub lines: Vec<TreeLine>,
    pub completion: Completion,
}

impl Rendered {
    pub fn result(&self) -> TraversalResult {
        self.completion.result()
    }

    /// The diagram as text, one line per entry, no trailing newline.
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
