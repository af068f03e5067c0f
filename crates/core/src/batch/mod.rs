//! Batch module: scan a directory and convert every recognized image.
//!
//! # Example
//!
//! ```ignore
//! use pngify_core::batch::{BatchConfig, BatchConverter};
//! use pngify_core::converter::ImageConverter;
//!
//! let config = BatchConfig::default();
//! let directory = config.resolve_directory()?;
//! let batch = BatchConverter::new(directory, config, ImageConverter::with_defaults());
//!
//! let (tx, mut rx) = tokio::sync::mpsc::channel(64);
//! tokio::spawn(async move {
//!     while let Some(event) = rx.recv().await {
//!         println!("{}", event);
//!     }
//! });
//!
//! let report = batch.run_with_events(tx).await?;
//! println!("{} converted", report.converted.len());
//! ```

mod config;
mod error;
mod runner;
mod types;

pub use config::BatchConfig;
pub use error::BatchError;
pub use runner::BatchConverter;
pub use types::{BatchEvent, BatchPlan, BatchReport};
