//! CLI entry point for linetree

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use linetree::tree::DEFAULT_EXTENSION;
use linetree::{DirectoryScanner, OutputConfig, ScanConfig, TreeFormatter};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "linetree")]
#[command(about = "Show per-directory line counts of source files as a tree")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Extension of the files to count (leading dot optional)
    #[arg(short = 'e', long = "ext", default_value = DEFAULT_EXTENSION)]
    ext: String,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Folder name shown in the report header.
///
/// Relative paths such as `.` or `..` are resolved first so the header
/// names the actual folder.
fn root_label(path: &Path) -> String {
    std::fs::canonicalize(path)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_else(|| path.display().to_string())
}

fn main() {
    let args = Args::parse();

    if !args.path.is_dir() {
        eprintln!(
            "linetree: cannot access '{}': No such directory",
            args.path.display()
        );
        process::exit(1);
    }

    let scanner = DirectoryScanner::new(ScanConfig::with_extension(&args.ext));
    let root = scanner.scan(&args.path);

    let formatter = TreeFormatter::new(OutputConfig {
        use_color: should_use_color(args.color),
    });
    let label = root_label(&args.path);

    if let Err(e) = formatter.print_report(&scanner.config().extension, &label, &root) {
        eprintln!("linetree: error writing output: {}", e);
        process::exit(1);
    }
}
