use super::{types::Config, ConfigError};
use crate::converter::naming::OUTPUT_EXTENSION;

/// Validate configuration
/// Currently validates:
/// - At least one extension is configured
/// - Every extension is a dot followed by a non-empty suffix with no
///   further dots
/// - `.png` is not an input extension (it would convert files onto themselves
///   and then delete them)
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let extensions = &config.batch.extensions;

    if extensions.is_empty() {
        return Err(ConfigError::ValidationError(
            "batch.extensions cannot be empty".to_string(),
        ));
    }

    for ext in extensions {
        let valid = ext
            .strip_prefix('.')
            .is_some_and(|suffix| !suffix.is_empty() && !suffix.contains('.'));
        if !valid {
            return Err(ConfigError::ValidationError(format!(
                "batch.extensions entry {:?} must be a dot followed by a single suffix",
                ext
            )));
        }
        if ext.eq_ignore_ascii_case(OUTPUT_EXTENSION) {
            return Err(ConfigError::ValidationError(format!(
                "batch.extensions cannot contain {}",
                OUTPUT_EXTENSION
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::BatchConfig;

    fn with_extensions(extensions: &[&str]) -> Config {
        Config {
            batch: BatchConfig::default().with_extensions(extensions.iter().copied()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_extensions_fails() {
        let result = validate_config(&with_extensions(&[]));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_extension_without_dot_fails() {
        assert!(validate_config(&with_extensions(&["jpg"])).is_err());
        assert!(validate_config(&with_extensions(&["."])).is_err());
        assert!(validate_config(&with_extensions(&[".tar.gz"])).is_err());
        assert!(validate_config(&with_extensions(&[".x.jpg"])).is_err());
        assert!(validate_config(&with_extensions(&[".jpg."])).is_err());
    }

    #[test]
    fn test_validate_png_extension_fails() {
        let result = validate_config(&with_extensions(&[".jpg", ".PNG"]));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_custom_extensions() {
        assert!(validate_config(&with_extensions(&[".tga", ".JPG"])).is_ok());
    }
}
