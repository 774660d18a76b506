//! Shared file reading utilities
//!
//! Line counting is best-effort: any I/O failure makes a file count as zero
//! lines instead of aborting the scan of a large tree.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Incremental line counter over a byte stream.
///
/// Recognises `\n`, `\r\n` and a lone `\r` as line terminators. A trailing
/// line without a terminator counts as one line. Terminators are matched at
/// the byte level, so invalid UTF-8 never affects the result.
#[derive(Debug, Default)]
struct LineCounter {
    lines: usize,
    after_cr: bool,
    partial: bool,
}

impl LineCounter {
    fn feed(&mut self, chunk: &[u8]) {
        for &byte in chunk {
            match byte {
                b'\n' => {
                    if !self.after_cr {
                        self.lines += 1;
                    }
                    self.after_cr = false;
                    self.partial = false;
                }
                b'\r' => {
                    self.lines += 1;
                    self.after_cr = true;
                    self.partial = false;
                }
                _ => {
                    self.after_cr = false;
                    self.partial = true;
                }
            }
        }
    }

    fn finish(self) -> usize {
        self.lines + usize::from(self.partial)
    }
}

/// Count lines in a file, propagating I/O errors.
pub fn try_count_lines(path: &Path) -> io::Result<usize> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut counter = LineCounter::default();

    loop {
        let chunk = reader.fill_buf()?;
        if chunk.is_empty() {
            break;
        }
        let len = chunk.len();
        counter.feed(chunk);
        reader.consume(len);
    }

    Ok(counter.finish())
}

/// Count lines in a file. Unreadable files count as zero lines.
pub fn count_lines(path: &Path) -> usize {
    try_count_lines(path).unwrap_or_default()
}
