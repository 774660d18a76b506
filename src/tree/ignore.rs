//! Per-directory ignore lists
//!
//! A marker file placed in a directory names subdirectories (one plain name
//! per line) that are skipped when scanning that directory. The list applies
//! to that one level only; subdirectories read their own marker file.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read the ignore list for `dir` from `marker_file`.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Returns an empty set when the
/// marker is absent. Reading stops silently at the first I/O or UTF-8 error,
/// keeping the names collected so far.
pub fn ignored_directory_names(dir: &Path, marker_file: &str) -> HashSet<String> {
    let mut ignored = HashSet::new();

    let marker_path = dir.join(marker_file);
    if !marker_path.is_file() {
        return ignored;
    }

    let file = match File::open(&marker_path) {
        Ok(f) => f,
        Err(_) => return ignored,
    };

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        for segment in buf.split(|&b| b == b'\r') {
            let Ok(line) = std::str::from_utf8(segment) else {
                return ignored;
            };
            let name = line.trim();
            if !name.is_empty() {
                ignored.insert(name.to_string());
            }
        }
    }

    ignored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::DEFAULT_MARKER_FILE;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_marker_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(ignored_directory_names(dir.path(), DEFAULT_MARKER_FILE).is_empty());
    }

    #[test]
    fn test_marker_lines_trimmed() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(DEFAULT_MARKER_FILE),
            "Library\n\n   Temp  \r\n\t\nobj",
        )
        .unwrap();

        let ignored = ignored_directory_names(dir.path(), DEFAULT_MARKER_FILE);
        assert_eq!(ignored.len(), 3);
        assert!(ignored.contains("Library"));
        assert!(ignored.contains("Temp"));
        assert!(ignored.contains("obj"));
    }

    #[test]
    fn test_carriage_return_line_endings() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_MARKER_FILE), "Library\rTemp\r").unwrap();

        let ignored = ignored_directory_names(dir.path(), DEFAULT_MARKER_FILE);
        assert_eq!(ignored.len(), 2);
        assert!(ignored.contains("Library"));
        assert!(ignored.contains("Temp"));
    }

    #[test]
    fn test_mixed_line_endings() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_MARKER_FILE), "obj\r\nbin\rLogs\n").unwrap();

        let ignored = ignored_directory_names(dir.path(), DEFAULT_MARKER_FILE);
        assert_eq!(ignored.len(), 3);
        assert!(ignored.contains("obj"));
        assert!(ignored.contains("bin"));
        assert!(ignored.contains("Logs"));
    }

    #[test]
    fn test_invalid_utf8_keeps_earlier_names() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(DEFAULT_MARKER_FILE),
            b"first\n\xff\xfe\nthird\n".as_slice(),
        )
        .unwrap();

        let ignored = ignored_directory_names(dir.path(), DEFAULT_MARKER_FILE);
        assert!(ignored.contains("first"));
        assert!(!ignored.contains("third"));
    }

    #[test]
    fn test_marker_directory_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(DEFAULT_MARKER_FILE)).unwrap();

        assert!(ignored_directory_names(dir.path(), DEFAULT_MARKER_FILE).is_empty());
    }
}
