//! Trait definitions for the converter module.

use async_trait::async_trait;

use super::error::ConverterError;
use super::types::{ConversionJob, ConversionResult};

/// A converter that rewrites image files as RGBA PNGs.
#[async_trait]
pub trait Converter: Send + Sync {
    /// Returns the name of this converter implementation.
    fn name(&self) -> &str;

    /// Converts the job's input into a PNG at its output path.
    ///
    /// An existing file at the output path is overwritten. The input is
    /// never modified or removed.
    async fn convert(&self, job: ConversionJob) -> Result<ConversionResult, ConverterError>;
}
