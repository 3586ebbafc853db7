//! Filesystem access used by the renderer

use std::ffi::OsString;
use std::path::Path;

use crate::error::ListError;

/// Where the renderer reads directories from.
pub trait DirSource {
    /// List the names of a directory's immediate children, in any order.
    fn list_children(&self, dir: &Path) -> Result<Vec<OsString>, ListError>;

    /// Whether `path` is a directory. Symlinks are followed.
    fn is_dir(&self, path: &Path) -> bool;
}

impl<S: DirSource + ?Sized> DirSource for &S {
    fn list_children(&self, dir: &Path) -> Result<Vec<OsString>, ListError> {
        (**self).list_children(dir)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl DirSource for FsSource {
    fn list_children(&self, dir: &Path) -> Result<Vec<OsString>, ListError> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            names.push(entry?.file_name());
        }
        Ok(names)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
