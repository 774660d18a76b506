//! Tree formatter for a scanned directory tree
//!
//! `TreeFormatter` renders a `DirectoryNode` as an indented ASCII tree. Both
//! the plain (`format*`) and colored (`print*`) paths share one writer so
//! their text is identical.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::tree::DirectoryNode;

use super::config::OutputConfig;
use super::utils::{child_prefix, connector, format_line_count, report_header};

/// Formatter for the line count tree.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Format the tree alone as plain text.
    pub fn format(&self, node: &DirectoryNode) -> String {
        self.render_plain(|out| self.write_tree(out, node))
    }

    /// Format the full report (header and tree) as plain text.
    pub fn format_report(&self, extension: &str, label: &str, node: &DirectoryNode) -> String {
        self.render_plain(|out| self.write_report(out, extension, label, node))
    }

    /// Print the full report to stdout.
    pub fn print_report(
        &self,
        extension: &str,
        label: &str,
        node: &DirectoryNode,
    ) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_report(&mut stdout, extension, label, node)?;
        stdout.flush()
    }

    /// Write the header followed by the tree.
    pub fn write_report<W: WriteColor>(
        &self,
        out: &mut W,
        extension: &str,
        label: &str,
        node: &DirectoryNode,
    ) -> io::Result<()> {
        writeln!(out)?;
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "{}", report_header(extension, label))?;
        out.reset()?;
        writeln!(out)?;
        writeln!(out)?;
        self.write_tree(out, node)
    }

    /// Write the tree rooted at `node`. Writes nothing when its total is zero.
    pub fn write_tree<W: WriteColor>(&self, out: &mut W, node: &DirectoryNode) -> io::Result<()> {
        self.write_node(out, node, "", true, true)
    }

    fn render_plain<F>(&self, render: F) -> String
    where
        F: FnOnce(&mut NoColor<Vec<u8>>) -> io::Result<()>,
    {
        let mut out = NoColor::new(Vec::new());
        // Writing into a Vec cannot fail
        let _ = render(&mut out);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    fn write_node<W: WriteColor>(
        &self,
        out: &mut W,
        node: &DirectoryNode,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<()> {
        if node.total_line_count() == 0 {
            return Ok(());
        }

        if !is_root {
            write!(out, "{}{}", prefix, connector(is_last))?;
        }
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}/", node.name())?;
        out.reset()?;
        write!(out, "  ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "[{}]", format_line_count(node.total_line_count()))?;
        out.reset()?;
        writeln!(out)?;

        let new_prefix = if is_root {
            String::new()
        } else {
            child_prefix(prefix, is_last)
        };

        let children = node.visible_children();
        for (i, child) in children.iter().enumerate() {
            let child_is_last = i == children.len() - 1;
            self.write_node(out, child, &new_prefix, child_is_last, false)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, lines: usize) -> DirectoryNode {
        DirectoryNode::builder(name, name).lines(lines).build()
    }

    fn formatter() -> TreeFormatter {
        TreeFormatter::new(OutputConfig { use_color: false })
    }

    #[test]
    fn test_root_only() {
        let root = DirectoryNode::builder(".", ".").lines(42).build();
        assert_eq!(formatter().format(&root), "./  [42]\n");
    }

    #[test]
    fn test_zero_total_root_renders_nothing() {
        let root = DirectoryNode::builder(".", ".")
            .child(leaf("empty", 0))
            .build();
        assert_eq!(formatter().format(&root), "");
    }

    #[test]
    fn test_pruned_children_and_connectors() {
        let root = DirectoryNode::builder("Game", "Game")
            .child(leaf("second", 2))
            .child(leaf("empty", 0))
            .child(leaf("first", 1))
            .build();

        let output = formatter().format(&root);
        assert_eq!(
            output,
            "Game/  [3]\n\
             ├── first/  [1]\n\
             └── second/  [2]\n"
        );
        assert!(!output.contains("empty"));
    }

    #[test]
    fn test_sibling_ordering_case_insensitive() {
        let root = DirectoryNode::builder("root", "root")
            .child(leaf("Zebra", 1))
            .child(leaf("apple", 1))
            .child(leaf("Banana", 1))
            .build();

        let output = formatter().format(&root);
        let names: Vec<&str> = output
            .lines()
            .skip(1)
            .map(|l| l.trim_start_matches(['├', '└', '─', ' ']))
            .collect();
        assert_eq!(names, vec!["apple/  [1]", "Banana/  [1]", "Zebra/  [1]"]);
    }

    #[test]
    fn test_nested_prefixes() {
        let first = DirectoryNode::builder("a", "a")
            .child(leaf("a1", 1))
            .child(leaf("a2", 1))
            .build();
        let last = DirectoryNode::builder("b", "b")
            .child(leaf("b1", 1))
            .build();
        let root = DirectoryNode::builder("root", "root")
            .child(first)
            .child(last)
            .build();

        assert_eq!(
            formatter().format(&root),
            "root/  [3]\n\
             ├── a/  [2]\n\
             │   ├── a1/  [1]\n\
             │   └── a2/  [1]\n\
             └── b/  [1]\n\
             \x20   └── b1/  [1]\n"
        );
    }

    #[test]
    fn test_thousands_separator() {
        let root = DirectoryNode::builder("big", "big").lines(1_234_567).build();
        assert_eq!(formatter().format(&root), "big/  [1 234 567]\n");
    }

    #[test]
    fn test_last_decided_after_pruning() {
        let root = DirectoryNode::builder("root", "root")
            .child(leaf("a", 1))
            .child(leaf("z", 0))
            .build();

        assert_eq!(formatter().format(&root), "root/  [1]\n└── a/  [1]\n");
    }

    #[test]
    fn test_format_report() {
        let root = DirectoryNode::builder(".", ".").child(leaf("Scripts", 10)).build();
        let report = formatter().format_report("cs", "Game", &root);
        assert_eq!(
            report,
            "\nRAPORT STRUKTURY KODU (.cs): Game\n\n./  [10]\n└── Scripts/  [10]\n"
        );
    }

    #[test]
    fn test_format_report_empty_tree() {
        let root = DirectoryNode::builder(".", ".").build();
        let report = formatter().format_report("cs", "Game", &root);
        assert_eq!(report, "\nRAPORT STRUKTURY KODU (.cs): Game\n\n");
    }
}
