//! Types for the converter module.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single source image to be rewritten as PNG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionJob {
    /// Source image path.
    pub input_path: PathBuf,
    /// Destination PNG path.
    pub output_path: PathBuf,
}

impl ConversionJob {
    /// Creates a job converting `input_path` into `output_path`.
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// File name of the source, for status lines.
    pub fn source_name(&self) -> String {
        display_name(&self.input_path)
    }

    /// File name of the destination, for status lines.
    pub fn output_name(&self) -> String {
        display_name(&self.output_path)
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Source image path.
    pub input_path: PathBuf,
    /// Written PNG path.
    pub output_path: PathBuf,
    /// Output file size in bytes.
    pub output_size_bytes: u64,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Detected input format (e.g. "jpeg", "gif").
    pub input_format: String,
    /// Conversion duration in milliseconds.
    pub duration_ms: u64,
}

/// Last path component, lossily decoded. Falls back to the whole path.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_display_names() {
        let job = ConversionJob::new("/pics/photo.v2.jpg", "/pics/photo.png");
        assert_eq!(job.source_name(), "photo.v2.jpg");
        assert_eq!(job.output_name(), "photo.png");
    }

    #[test]
    fn test_display_name_without_file_name() {
        assert_eq!(display_name(Path::new("/")), "/");
    }
}
