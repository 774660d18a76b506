//! DirectoryScanner - builds the line count tree in memory

use std::path::Path;

use crate::file_utils::count_lines;

use super::config::ScanConfig;
use super::ignore::ignored_directory_names;
use super::node::DirectoryNode;

/// Recursive, single-threaded directory scanner.
///
/// Scanning never fails: unreadable files count as zero lines and
/// unreadable directories become empty nodes.
pub struct DirectoryScanner {
    config: ScanConfig,
}

impl DirectoryScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `root` and return its fully aggregated node.
    pub fn scan(&self, root: &Path) -> DirectoryNode {
        let suffix = self.config.suffix();
        self.scan_dir(root, &suffix)
    }

    fn scan_dir(&self, path: &Path, suffix: &str) -> DirectoryNode {
        let mut node = DirectoryNode::builder(display_name(path), path);

        let entries = match std::fs::read_dir(path) {
            Ok(e) => e,
            Err(_) => return node.build(),
        };

        let mut files = Vec::new();
        let mut dirs = Vec::new();
        for entry in entries.filter_map(|e| e.ok()) {
            let entry_path = entry.path();
            // Symlinked directories are listed but never descended into
            let is_symlink = entry.file_type().is_ok_and(|t| t.is_symlink());
            if entry_path.is_file() {
                files.push(entry_path);
            } else if entry_path.is_dir() && !is_symlink {
                dirs.push(entry_path);
            }
        }

        for file in files.iter().filter(|f| has_suffix(f, suffix)) {
            node.add_lines(count_lines(file));
        }

        let ignored = ignored_directory_names(path, &self.config.marker_file);
        for dir in dirs {
            let skip = dir
                .file_name()
                .is_some_and(|n| ignored.contains(n.to_string_lossy().as_ref()));
            if skip {
                continue;
            }
            node.add_child(self.scan_dir(&dir, suffix));
        }

        node.build()
    }
}

/// Base name of `path`, or the whole path when it has none (e.g. `.`).
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|n| n.to_string_lossy().ends_with(suffix))
}
