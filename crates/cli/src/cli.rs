//! Command line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use pngify_core::{Config, LogFormat};

/// Convert every image in a directory to PNG and delete the originals.
#[derive(Debug, Parser)]
#[command(name = "pngify", version)]
pub struct Cli {
    /// Directory to convert [default: the directory holding this executable]
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Configuration file [default: $PNGIFY_CONFIG, then ./pngify.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print what would be converted without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Keep the original files after conversion
    #[arg(long)]
    pub keep_originals: bool,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormatArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

impl Cli {
    /// Applies flags on top of the loaded configuration. Flags only ever
    /// switch things on, so an unset flag leaves the config value alone.
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.dir {
            config.batch.directory = Some(dir.clone());
        }
        if self.dry_run {
            config.batch.dry_run = true;
        }
        if self.keep_originals {
            config.batch.preserve_originals = true;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "pngify",
            "--dir",
            "/srv/images",
            "--dry-run",
            "--keep-originals",
            "--log-format",
            "json",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.batch.directory, Some(PathBuf::from("/srv/images")));
        assert!(config.batch.dry_run);
        assert!(config.batch.preserve_originals);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["pngify"]);
        let mut config = Config::default();
        config.batch.dry_run = true;
        cli.apply(&mut config);

        assert!(config.batch.directory.is_none());
        assert!(config.batch.dry_run);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }
}
