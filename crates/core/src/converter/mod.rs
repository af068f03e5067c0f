//! Converter module for rewriting images as PNG.
//!
//! This module provides the `Converter` trait, the `image`-crate backed
//! implementation and the file name rules that decide which files are
//! converted and what their output is called.
//!
//! # Example
//!
//! ```ignore
//! use pngify_core::converter::{ConversionJob, Converter, ImageConverter};
//!
//! let converter = ImageConverter::with_defaults();
//! let job = ConversionJob::new("/pics/photo.v2.jpg", "/pics/photo.png");
//!
//! let result = converter.convert(job).await?;
//! println!("{}x{} {} in {} ms", result.width, result.height, result.input_format, result.duration_ms);
//! ```

mod config;
mod error;
mod image_converter;
pub mod naming;
mod traits;
mod types;

pub use config::{ConverterConfig, PngCompression};
pub use error::ConverterError;
pub use image_converter::ImageConverter;
pub use naming::{base_name, is_recognized, output_file_name, DEFAULT_EXTENSIONS};
pub use traits::Converter;
pub use types::{ConversionJob, ConversionResult};
