//! Error types for the converter module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during conversion.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// Input file not found.
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Neither the content nor the extension identify an image format.
    #[error("Unsupported input format: {path}")]
    UnsupportedInputFormat { path: PathBuf },

    /// The image could not be decoded.
    #[error("Failed to decode {path}")]
    DecodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The PNG could not be encoded or written.
    #[error("Failed to write PNG to {path}")]
    EncodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The blocking codec task panicked or was cancelled.
    #[error("Conversion task failed: {reason}")]
    TaskFailed { reason: String },

    /// Reading the input or writing the output failed.
    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConverterError {
    /// Creates a new decode failed error.
    pub fn decode_failed(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::DecodeFailed {
            path: path.into(),
            source,
        }
    }

    /// Creates a new encode failed error.
    pub fn encode_failed(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::EncodeFailed {
            path: path.into(),
            source,
        }
    }

    /// Creates a new I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
