//! Report formatting and display
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Connectors, prefixes and number formatting
//! - `tree` - Tree formatter for a scanned `DirectoryNode`

mod config;
mod tree;
mod utils;

// Re-export public types and functions
pub use config::OutputConfig;
pub use tree::TreeFormatter;
pub use utils::{child_prefix, connector, format_line_count, report_header};
