//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::tree::DEFAULT_MARKER_FILE;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
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

    /// Add a file containing `lines` numbered lines.
    pub fn add_lines(&self, path: &str, lines: usize) -> PathBuf {
        let content: String = (1..=lines).map(|i| format!("// line {}\n", i)).collect();
        self.add_file(path, &content)
    }

    /// Create an empty directory, including parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Write an ignore marker into `dir` (relative, `""` for the root).
    pub fn ignore(&self, dir: &str, names: &[&str]) -> PathBuf {
        let marker = Path::new(dir).join(DEFAULT_MARKER_FILE);
        let content: String = names.iter().map(|n| format!("{}\n", n)).collect();
        self.add_file(&marker.to_string_lossy(), &content)
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
