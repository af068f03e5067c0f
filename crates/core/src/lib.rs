pub mod batch;
pub mod config;
pub mod converter;
pub mod testing;

pub use batch::{BatchConfig, BatchConverter, BatchError, BatchEvent, BatchPlan, BatchReport};
pub use config::{
    load_config, load_config_from_str, load_config_or_default, validate_config, Config,
    ConfigError, LogFormat, LoggingConfig,
};
pub use converter::{
    ConversionJob, ConversionResult, Converter, ConverterConfig, ConverterError, ImageConverter,
    PngCompression,
};
