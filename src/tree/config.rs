//! Configuration types for the directory scanner

/// Extension tracked when none is configured.
pub const DEFAULT_EXTENSION: &str = "cs";

/// Name of the per-directory file listing subdirectories to skip.
pub const DEFAULT_MARKER_FILE: &str = "line_abort.txt";

/// Configuration for scanning behavior.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// File extension to count, without the leading dot.
    /// Matching is a case-sensitive suffix check on the file name.
    pub extension: String,
    /// Marker file whose lines name subdirectories excluded at that level
    pub marker_file: String,
}

impl ScanConfig {
    /// Build a config tracking `extension`. A leading dot is accepted and dropped.
    pub fn with_extension(extension: &str) -> Self {
        Self {
            extension: extension.trim_start_matches('.').to_string(),
            ..Default::default()
        }
    }

    /// The suffix a file name must end with to be counted, e.g. `.cs`.
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            marker_file: DEFAULT_MARKER_FILE.to_string(),
        }
    }
}
