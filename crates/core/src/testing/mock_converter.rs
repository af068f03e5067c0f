//! Mock converter for testing.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::converter::{ConversionJob, ConversionResult, Converter, ConverterError};

/// Bytes written as the "PNG" for every successful mock conversion.
pub const MOCK_PNG: &[u8] = b"mock png";

/// A recorded conversion job for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedConversion {
    /// The job that was submitted.
    pub job: ConversionJob,
    /// Whether the conversion succeeded.
    pub success: bool,
}

/// Mock implementation of the Converter trait.
///
/// Writes [`MOCK_PNG`] to the output path instead of decoding anything, so
/// batch behavior can be checked on the filesystem without real images.
/// Inputs registered with [`MockConverter::fail_on`] fail as undecodable.
///
/// # Example
///
/// ```rust,ignore
/// use pngify_core::testing::MockConverter;
///
/// let converter = MockConverter::new();
/// converter.fail_on("broken.jpg").await;
///
/// let batch = BatchConverter::new(dir, BatchConfig::default(), converter);
/// let err = batch.run().await.unwrap_err();
///
/// assert_eq!(batch.converter().conversion_count().await, 1);
/// ```
#[derive(Debug, Default)]
pub struct MockConverter {
    /// Recorded conversions.
    conversions: Arc<RwLock<Vec<RecordedConversion>>>,
    /// Input file names that fail to convert.
    failing_inputs: Arc<RwLock<HashSet<String>>>,
}

impl MockConverter {
    /// Create a new mock converter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded conversions.
    pub async fn recorded_conversions(&self) -> Vec<RecordedConversion> {
        self.conversions.read().await.clone()
    }

    /// Get the number of conversions attempted.
    pub async fn conversion_count(&self) -> usize {
        self.conversions.read().await.len()
    }

    /// Make conversions of the named input file fail.
    pub async fn fail_on(&self, file_name: impl Into<String>) {
        self.failing_inputs.write().await.insert(file_name.into());
    }

    async fn should_fail(&self, job: &ConversionJob) -> bool {
        self.failing_inputs
            .read()
            .await
            .contains(&job.source_name())
    }

    async fn record(&self, job: &ConversionJob, success: bool) {
        self.conversions.write().await.push(RecordedConversion {
            job: job.clone(),
            success,
        });
    }
}

#[async_trait]
impl Converter for MockConverter {
    fn name(&self) -> &str {
        "mock"
    }

    async fn convert(&self, job: ConversionJob) -> Result<ConversionResult, ConverterError> {
        if self.should_fail(&job).await {
            self.record(&job, false).await;
            return Err(ConverterError::UnsupportedInputFormat {
                path: job.input_path,
            });
        }

        if tokio::fs::metadata(&job.input_path).await.is_err() {
            self.record(&job, false).await;
            return Err(ConverterError::InputNotFound {
                path: job.input_path,
            });
        }

        tokio::fs::write(&job.output_path, MOCK_PNG)
            .await
            .map_err(|e| ConverterError::io(&job.output_path, e))?;
        self.record(&job, true).await;

        Ok(ConversionResult {
            input_path: job.input_path,
            output_path: job.output_path,
            output_size_bytes: MOCK_PNG.len() as u64,
            width: 1,
            height: 1,
            input_format: "mock".to_string(),
            duration_ms: 0,
        })
    }
}
