//! Directory scanning and line aggregation
//!
//! `DirectoryScanner` walks a directory recursively and produces an immutable
//! `DirectoryNode` tree. Each node carries the line count of matching files
//! directly inside it and the cumulative count of its whole subtree.

mod config;
mod ignore;
mod node;
mod scanner;

// Re-export public types
pub use config::{DEFAULT_EXTENSION, DEFAULT_MARKER_FILE, ScanConfig};
pub use ignore::ignored_directory_names;
pub use node::{DirectoryNode, DirectoryNodeBuilder};
pub use scanner::DirectoryScanner;
