//! Error types for the batch module.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::converter::ConverterError;

/// Errors that stop a batch run. Work finished before the error is kept.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The directory to convert does not exist.
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Listing the directory failed.
    #[error("Failed to scan directory: {path}")]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Converting a file failed.
    #[error("Failed to convert {path}")]
    ConversionFailed {
        path: PathBuf,
        #[source]
        source: ConverterError,
    },

    /// Deleting a converted source failed.
    #[error("Failed to remove original file: {path}")]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BatchError {
    /// Creates a scan failed error.
    pub fn scan_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ScanFailed {
            path: path.into(),
            source,
        }
    }

    /// Path of the file or directory the error is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::DirectoryNotFound { path }
            | Self::ScanFailed { path, .. }
            | Self::ConversionFailed { path, .. }
            | Self::RemoveFailed { path, .. } => path.as_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_conversion_failed_keeps_source() {
        let err = BatchError::ConversionFailed {
            path: PathBuf::from("/pics/a.jpg"),
            source: ConverterError::InputNotFound {
                path: PathBuf::from("/pics/a.jpg"),
            },
        };
        assert_eq!(err.to_string(), "Failed to convert /pics/a.jpg");
        assert!(err.source().is_some());
        assert_eq!(err.path(), Path::new("/pics/a.jpg"));
    }
}
