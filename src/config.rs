use std::path::{Path, PathBuf};

/// File name the report is written to when none is configured
pub const DEFAULT_OUTPUT_FILE: &str = "rps.html";

/// Settings for a report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Where the HTML report is written
    pub output_path: PathBuf,
}

impl ReportConfig {
    pub fn with_output_path(path: impl AsRef<Path>) -> Self {
        Self {
            output_path: path.as_ref().to_path_buf(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}
