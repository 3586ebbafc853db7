//! Error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to callers of the renderer.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("'{}' is not a valid directory", .0.display())]
    InvalidRoot(PathBuf),

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A directory listing that failed. Recovered locally by the renderer.
#[derive(Error, Debug)]
pub enum ListError {
    #[error("permission denied")]
    PermissionDenied,

    #[error("directory not found")]
    NotFound,

    #[error(transparent)]
    Other(io::Error),
}

impl ListError {
    /// Text of the placeholder line rendered in place of the directory's children.
    pub fn placeholder(&self, name: &str) -> String {
        match self {
            ListError::PermissionDenied => format!("[Error: Permission Denied for {}]", name),
            ListError::NotFound => format!("[Error: Directory Not Found: {}]", name),
            ListError::Other(e) => format!("[Error: Cannot Read {}: {}]", name, e),
        }
    }
}

impl From<io::Error> for ListError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ListError::PermissionDenied,
            io::ErrorKind::NotFound => ListError::NotFound,
            _ => ListError::Other(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
