//! linetree - per-directory line counts of source files, shown as a tree

pub mod file_utils;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use file_utils::count_lines;
pub use output::{OutputConfig, TreeFormatter};
pub use tree::{DirectoryNode, DirectoryNodeBuilder, DirectoryScanner, ScanConfig};
