//! Types for the batch module.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::converter::{ConversionJob, ConversionResult};

/// Files found by scanning a directory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchPlan {
    /// One job per recognized file, in listing order.
    pub jobs: Vec<ConversionJob>,
    /// Recognized files left alone because their name has no base.
    pub skipped: Vec<PathBuf>,
}

/// Progress event emitted while a batch runs.
///
/// `Display` renders the status line printed for the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BatchEvent {
    /// Dry run: this conversion would happen.
    Planned { job: ConversionJob },
    /// A PNG was written.
    Converted { job: ConversionJob },
    /// A source file was deleted after conversion.
    Removed { job: ConversionJob },
}

impl fmt::Display for BatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planned { job } => write!(
                f,
                "Would convert {} -> {}",
                job.source_name(),
                job.output_name()
            ),
            Self::Converted { job } => write!(
                f,
                "Converted {} -> {}",
                job.source_name(),
                job.output_name()
            ),
            Self::Removed { job } => write!(f, "Removed original file: {}", job.source_name()),
        }
    }
}

/// Summary of a completed batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Conversions that would have run (dry run only).
    pub planned: Vec<ConversionJob>,
    /// Conversions performed.
    pub converted: Vec<ConversionResult>,
    /// Source files deleted.
    pub removed: Vec<PathBuf>,
    /// Recognized files that were skipped.
    pub skipped: Vec<PathBuf>,
    /// Wall time of the whole batch in milliseconds.
    pub duration_ms: u64,
}
