//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Build a balanced tree `depth` levels deep with `fanout` subdirectories
    /// and `files` files per directory.
    pub fn populate(&self, depth: usize, fanout: usize, files: usize) {
        fn fill(dir: &Path, depth: usize, fanout: usize, files: usize) {
            for i in 0..files {
                fs::write(dir.join(format!("file_{}.txt", i)), "").expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for i in 0..fanout {
                let sub = dir.join(format!("dir_{}", i));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, depth - 1, fanout, files);
            }
        }
        fill(self.dir.path(), depth, fanout, files);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
