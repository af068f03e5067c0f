//! Configuration for the batch module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::converter::DEFAULT_EXTENSIONS;

/// Configuration for a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Directory to convert. Defaults to the directory holding the executable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Extensions (with leading dot) that are converted, case-insensitive.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Keep source files after conversion instead of deleting them.
    #[serde(default)]
    pub preserve_originals: bool,

    /// Only report what would be converted.
    #[serde(default)]
    pub dry_run: bool,
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            directory: None,
            extensions: default_extensions(),
            preserve_originals: false,
            dry_run: false,
        }
    }
}

impl BatchConfig {
    /// Sets the directory to convert.
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Sets the recognized extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Keeps source files after conversion.
    pub fn with_preserve_originals(mut self, preserve: bool) -> Self {
        self.preserve_originals = preserve;
        self
    }

    /// Only plans the batch, touching nothing.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The configured directory, or the one containing the running executable.
    pub fn resolve_directory(&self) -> std::io::Result<PathBuf> {
        if let Some(dir) = &self.directory {
            return Ok(dir.clone());
        }

        let exe = std::env::current_exe()?;
        exe.parent().map(|p| p.to_path_buf()).ok_or_else(|| {
            std::io::Error::other(format!(
                "executable path has no parent directory: {}",
                exe.display()
            ))
        })
    }
}
