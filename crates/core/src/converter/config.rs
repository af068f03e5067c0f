//! Configuration for the converter module.

use image::codecs::png::CompressionType;
use serde::{Deserialize, Serialize};

/// PNG compression effort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PngCompression {
    /// Encoder default, balanced size and speed.
    #[default]
    Default,
    /// Fastest encoding, larger files.
    Fast,
    /// Smallest files, slowest encoding.
    Best,
}

impl PngCompression {
    /// Maps to the encoder's compression setting.
    pub fn compression_type(&self) -> CompressionType {
        match self {
            Self::Default => CompressionType::Default,
            Self::Fast => CompressionType::Fast,
            Self::Best => CompressionType::Best,
        }
    }
}

/// Configuration for the image converter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// PNG compression level for written files.
    #[serde(default)]
    pub compression: PngCompression,
}

impl ConverterConfig {
    /// Sets the compression level.
    pub fn with_compression(mut self, compression: PngCompression) -> Self {
        self.compression = compression;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConverterConfig::default();
        assert_eq!(config.compression, PngCompression::Default);
    }

    #[test]
    fn test_config_builder() {
        let config = ConverterConfig::default().with_compression(PngCompression::Best);
        assert_eq!(config.compression, PngCompression::Best);
    }

    #[test]
    fn test_config_serialization() {
        let config = ConverterConfig::default().with_compression(PngCompression::Fast);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"fast\""));
        let parsed: ConverterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.compression, PngCompression::Fast);
    }

    #[test]
    fn test_compression_mapping() {
        assert!(matches!(
            PngCompression::Best.compression_type(),
            CompressionType::Best
        ));
        assert!(matches!(
            PngCompression::Fast.compression_type(),
            CompressionType::Fast
        ));
    }
}
