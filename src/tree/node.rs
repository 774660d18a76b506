//! Directory nodes of the line count tree

use std::path::{Path, PathBuf};

/// One directory of the scanned tree.
///
/// Nodes are frozen once built: `total_line_count` always equals
/// `local_line_count` plus the totals of all children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    name: String,
    path: PathBuf,
    local_line_count: usize,
    total_line_count: usize,
    children: Vec<DirectoryNode>,
}

impl DirectoryNode {
    /// Start building a node for the directory at `path`.
    pub fn builder(name: impl Into<String>, path: impl Into<PathBuf>) -> DirectoryNodeBuilder {
        DirectoryNodeBuilder {
            name: name.into(),
            path: path.into(),
            local_line_count: 0,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines in matching files directly inside this directory.
    pub fn local_line_count(&self) -> usize {
        self.local_line_count
    }

    /// Lines in this directory and all of its subdirectories.
    pub fn total_line_count(&self) -> usize {
        self.total_line_count
    }

    /// Child directories in scan order.
    pub fn children(&self) -> &[DirectoryNode] {
        &self.children
    }

    /// Children with a non-zero total, sorted case-insensitively by name.
    pub fn visible_children(&self) -> Vec<&DirectoryNode> {
        let mut visible: Vec<&DirectoryNode> = self
            .children
            .iter()
            .filter(|child| child.total_line_count > 0)
            .collect();
        visible.sort_by_cached_key(|child| child.name.to_lowercase());
        visible
    }
}

/// Accumulates counts and children while a directory is being scanned.
#[derive(Debug)]
pub struct DirectoryNodeBuilder {
    name: String,
    path: PathBuf,
    local_line_count: usize,
    children: Vec<DirectoryNode>,
}

impl DirectoryNodeBuilder {
    /// Add lines from a file directly inside this directory.
    pub fn add_lines(&mut self, lines: usize) -> &mut Self {
        self.local_line_count += lines;
        self
    }

    /// Append a fully built subdirectory.
    pub fn add_child(&mut self, child: DirectoryNode) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Consuming variant of [`add_lines`](Self::add_lines).
    pub fn lines(mut self, lines: usize) -> Self {
        self.add_lines(lines);
        self
    }

    /// Consuming variant of [`add_child`](Self::add_child).
    pub fn child(mut self, child: DirectoryNode) -> Self {
        self.add_child(child);
        self
    }

    /// Aggregate the subtree total and freeze the node.
    pub fn build(self) -> DirectoryNode {
        let child_sum: usize = self.children.iter().map(|c| c.total_line_count).sum();
        DirectoryNode {
            total_line_count: self.local_line_count + child_sum,
            name: self.name,
            path: self.path,
            local_line_count: self.local_line_count,
            children: self.children,
        }
    }
}
