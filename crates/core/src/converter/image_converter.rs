//! Converter implementation backed by the `image` crate.

use async_trait::async_trait;
use image::codecs::png::{FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, ImageFormat, ImageReader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::debug;

use super::config::{ConverterConfig, PngCompression};
use super::error::ConverterError;
use super::traits::Converter;
use super::types::{ConversionJob, ConversionResult};

/// What the blocking codec pass hands back to the async side.
struct EncodedImage {
    width: u32,
    height: u32,
    input_format: String,
    output_size_bytes: u64,
}

/// Decodes any format the `image` crate understands and writes RGBA PNGs.
pub struct ImageConverter {
    config: ConverterConfig,
}

impl ImageConverter {
    /// Creates a new converter with the given configuration.
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Creates a converter with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ConverterConfig::default())
    }

    /// Decode, expand to RGBA8 and encode. CPU bound, so callers run it on
    /// the blocking pool.
    fn convert_blocking(
        input: &Path,
        output: &Path,
        compression: PngCompression,
    ) -> Result<EncodedImage, ConverterError> {
        let reader = ImageReader::open(input)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ConverterError::InputNotFound {
                        path: input.to_path_buf(),
                    }
                } else {
                    ConverterError::io(input, e)
                }
            })?
            // Content wins over the extension when the magic bytes are known
            .with_guessed_format()
            .map_err(|e| ConverterError::io(input, e))?;

        let format = reader
            .format()
            .ok_or_else(|| ConverterError::UnsupportedInputFormat {
                path: input.to_path_buf(),
            })?;

        let decoded = reader
            .decode()
            .map_err(|e| ConverterError::decode_failed(input, e))?;

        // Sources without alpha get a fully opaque channel
        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();

        let file = File::create(output).map_err(|e| ConverterError::io(output, e))?;
        let mut writer = BufWriter::new(file);
        PngEncoder::new_with_quality(
            &mut writer,
            compression.compression_type(),
            FilterType::Adaptive,
        )
        .write_image(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
        .map_err(|e| ConverterError::encode_failed(output, e))?;
        writer.flush().map_err(|e| ConverterError::io(output, e))?;

        let output_size_bytes = std::fs::metadata(output)
            .map_err(|e| ConverterError::io(output, e))?
            .len();

        Ok(EncodedImage {
            width,
            height,
            input_format: format_name(format),
            output_size_bytes,
        })
    }
}

fn format_name(format: ImageFormat) -> String {
    format!("{:?}", format).to_lowercase()
}

#[async_trait]
impl Converter for ImageConverter {
    fn name(&self) -> &str {
        "image"
    }

    async fn convert(&self, job: ConversionJob) -> Result<ConversionResult, ConverterError> {
        let start = Instant::now();
        let compression = self.config.compression;
        let input = job.input_path.clone();
        let output = job.output_path.clone();

        let encoded = tokio::task::spawn_blocking(move || {
            Self::convert_blocking(&input, &output, compression)
        })
        .await
        .map_err(|e| ConverterError::TaskFailed {
            reason: e.to_string(),
        })??;

        debug!(
            input = %job.input_path.display(),
            format = %encoded.input_format,
            width = encoded.width,
            height = encoded.height,
            bytes = encoded.output_size_bytes,
            "Wrote PNG"
        );

        Ok(ConversionResult {
            input_path: job.input_path,
            output_path: job.output_path,
            output_size_bytes: encoded.output_size_bytes,
            width: encoded.width,
            height: encoded.height,
            input_format: encoded.input_format,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}
