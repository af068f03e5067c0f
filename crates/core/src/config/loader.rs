use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix for environment overrides, nested with `__`
/// (e.g. `PNGIFY_BATCH__DRY_RUN=true`)
pub const ENV_PREFIX: &str = "PNGIFY_";

fn base_figment() -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
}

fn extract(figment: Figment) -> Result<Config, ConfigError> {
    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    extract(base_figment().merge(Toml::file(path)))
}

/// Like `load_config`, but a missing file just means defaults plus environment
pub fn load_config_or_default(path: &Path) -> Result<Config, ConfigError> {
    let figment = if path.exists() {
        base_figment().merge(Toml::file(path))
    } else {
        base_figment()
    };

    extract(figment)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use figment::Jail;
    use std::path::PathBuf;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[batch]
directory = "/srv/images"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.batch.directory, Some(PathBuf::from("/srv/images")));
    }

    #[test]
    fn test_load_config_from_str_invalid() {
        let toml = r#"
[batch]
dry_run = "sometimes"
"#;
        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/pngify.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_config_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "pngify.toml",
                r#"
[batch]
directory = "/srv/images"
preserve_originals = true

[logging]
format = "json"
"#,
            )?;

            let config = load_config(Path::new("pngify.toml")).map_err(|e| e.to_string())?;
            assert_eq!(config.batch.directory, Some(PathBuf::from("/srv/images")));
            assert!(config.batch.preserve_originals);
            assert_eq!(config.batch.extensions.len(), 6);
            assert_eq!(config.logging.format, LogFormat::Json);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "pngify.toml",
                r#"
[batch]
dry_run = false
"#,
            )?;
            jail.set_env("PNGIFY_BATCH__DRY_RUN", "true");
            jail.set_env("PNGIFY_LOGGING__LEVEL", "debug");

            let config = load_config(Path::new("pngify.toml")).map_err(|e| e.to_string())?;
            assert!(config.batch.dry_run);
            assert_eq!(config.logging.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("PNGIFY_BATCH__PRESERVE_ORIGINALS", "true");

            let config =
                load_config_or_default(Path::new("absent.toml")).map_err(|e| e.to_string())?;
            assert!(config.batch.directory.is_none());
            assert!(config.batch.preserve_originals);
            assert!(!config.batch.dry_run);
            Ok(())
        });
    }
}
