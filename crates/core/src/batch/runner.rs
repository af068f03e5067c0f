//! Batch runner: one sequential pass over a directory.

use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::converter::{is_recognized, output_file_name, ConversionJob, Converter};

use super::config::BatchConfig;
use super::error::BatchError;
use super::types::{BatchEvent, BatchPlan, BatchReport};

/// Converts every recognized image in a directory to PNG.
///
/// Jobs run strictly one after another. The first failure aborts the rest of
/// the batch; files already converted or removed stay that way.
pub struct BatchConverter<C: Converter> {
    directory: PathBuf,
    config: BatchConfig,
    converter: C,
}

impl<C: Converter> BatchConverter<C> {
    /// Creates a batch over `directory`. The directory in `config` is ignored.
    pub fn new(directory: impl Into<PathBuf>, config: BatchConfig, converter: C) -> Self {
        Self {
            directory: directory.into(),
            config,
            converter,
        }
    }

    /// The directory being converted.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The batch configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// The converter doing the work.
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Lists the directory and builds one job per recognized regular file.
    ///
    /// Entries come back in whatever order the filesystem lists them.
    pub async fn scan(&self) -> Result<BatchPlan, BatchError> {
        let mut entries = fs::read_dir(&self.directory).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BatchError::DirectoryNotFound {
                    path: self.directory.clone(),
                }
            } else {
                BatchError::scan_failed(&self.directory, e)
            }
        })?;

        let mut plan = BatchPlan::default();

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| BatchError::scan_failed(&self.directory, e))?
        {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                debug!(entry = ?file_name, "Ignoring non UTF-8 file name");
                continue;
            };

            if !is_recognized(name, &self.config.extensions) {
                continue;
            }

            let path = entry.path();
            let metadata = match fs::metadata(&path).await {
                Ok(metadata) => metadata,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    // Dangling symlink, or removed since the listing
                    debug!(entry = %path.display(), "Ignoring entry with no target");
                    continue;
                }
                Err(e) => return Err(BatchError::scan_failed(&path, e)),
            };
            if !metadata.is_file() {
                debug!(entry = %path.display(), "Ignoring non-file entry");
                continue;
            }

            match output_file_name(name) {
                Some(output) => {
                    let output_path = self.directory.join(output);
                    plan.jobs.push(ConversionJob::new(path, output_path));
                }
                None => {
                    warn!(file = %path.display(), "Skipping file with no base name");
                    plan.skipped.push(path);
                }
            }
        }

        Ok(plan)
    }

    /// Scans the directory and converts every job.
    pub async fn run(&self) -> Result<BatchReport, BatchError> {
        self.execute(None).await
    }

    /// Like [`run`](Self::run), sending an event after each conversion and
    /// each removal.
    ///
    /// If the receiver is dropped, the batch continues without events.
    pub async fn run_with_events(
        &self,
        events: mpsc::Sender<BatchEvent>,
    ) -> Result<BatchReport, BatchError> {
        self.execute(Some(events)).await
    }

    async fn execute(
        &self,
        events: Option<mpsc::Sender<BatchEvent>>,
    ) -> Result<BatchReport, BatchError> {
        let start = Instant::now();
        let plan = self.scan().await?;

        info!(
            directory = %self.directory.display(),
            files = plan.jobs.len(),
            converter = self.converter.name(),
            dry_run = self.config.dry_run,
            "Starting batch"
        );

        let mut report = BatchReport {
            dry_run: self.config.dry_run,
            skipped: plan.skipped,
            ..Default::default()
        };

        for job in plan.jobs {
            if self.config.dry_run {
                emit(&events, BatchEvent::Planned { job: job.clone() }).await;
                report.planned.push(job);
                continue;
            }

            let result = self.converter.convert(job.clone()).await.map_err(|source| {
                BatchError::ConversionFailed {
                    path: job.input_path.clone(),
                    source,
                }
            })?;
            debug!(
                source = %job.source_name(),
                output = %job.output_name(),
                duration_ms = result.duration_ms,
                "Converted"
            );
            report.converted.push(result);
            emit(&events, BatchEvent::Converted { job: job.clone() }).await;

            if self.config.preserve_originals {
                continue;
            }

            fs::remove_file(&job.input_path)
                .await
                .map_err(|source| BatchError::RemoveFailed {
                    path: job.input_path.clone(),
                    source,
                })?;
            debug!(file = %job.source_name(), "Removed original");
            report.removed.push(job.input_path.clone());
            emit(&events, BatchEvent::Removed { job }).await;
        }

        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            converted = report.converted.len(),
            removed = report.removed.len(),
            skipped = report.skipped.len(),
            duration_ms = report.duration_ms,
            "Batch complete"
        );

        Ok(report)
    }
}

async fn emit(events: &Option<mpsc::Sender<BatchEvent>>, event: BatchEvent) {
    if let Some(tx) = events {
        // Closed receiver: nobody is listening any more
        let _ = tx.send(event).await;
    }
}
