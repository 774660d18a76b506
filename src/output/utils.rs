//! Shared utility functions for output formatting

/// Tree connector drawn before a node's name.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Calculate the prefix passed down to a node's children.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Format a line count with spaces between groups of three digits.
pub fn format_line_count(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(' ');
        }
        result.push(c);
    }

    result
}

/// Title line of the report, e.g. `RAPORT STRUKTURY KODU (.cs): Game`.
pub fn report_header(extension: &str, label: &str) -> String {
    format!("RAPORT STRUKTURY KODU (.{}): {}", extension, label)
}
