mod cli;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pngify_core::{
    load_config, load_config_or_default, validate_config, BatchConverter, ImageConverter,
    LogFormat, LoggingConfig,
};

use cli::Cli;

/// Config file looked up in the working directory when none is named
const DEFAULT_CONFIG_FILE: &str = "pngify.toml";

/// Buffer size for the status line channel
const EVENT_BUFFER_SIZE: usize = 64;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout is reserved for status lines
    match logging.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
    .context("Failed to initialize logging")
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Named config (flag or env) must exist; the implicit one is optional
    let named_config = cli
        .config
        .clone()
        .or_else(|| std::env::var("PNGIFY_CONFIG").ok().map(PathBuf::from));
    let loaded = match &named_config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config from {:?}", path)),
        None => load_config_or_default(Path::new(DEFAULT_CONFIG_FILE))
            .context("Failed to load configuration"),
    };

    // Logging comes up before the config error is reported so it gets printed
    let mut config = match loaded {
        Ok(config) => {
            let mut logging = config.logging.clone();
            if let Some(format) = cli.log_format {
                logging.format = format.into();
            }
            init_logging(&logging)?;
            config
        }
        Err(e) => {
            init_logging(&LoggingConfig::default())?;
            return Err(e);
        }
    };

    cli.apply(&mut config);
    validate_config(&config).context("Configuration validation failed")?;

    let directory = config
        .batch
        .resolve_directory()
        .context("Failed to determine the directory to convert")?;
    info!("Converting images in {:?}", directory);

    let converter = ImageConverter::new(config.converter.clone());
    let batch = BatchConverter::new(directory, config.batch.clone(), converter);

    let (events_tx, mut events_rx) = mpsc::channel(EVENT_BUFFER_SIZE);
    let printer = tokio::spawn(async move {
        while let Some(event) = events_rx.recv().await {
            println!("{}", event);
        }
    });

    // The sender is dropped when the batch returns, which ends the printer
    let result = batch.run_with_events(events_tx).await;
    printer.await.context("Status printer failed")?;

    let report = result.context("Batch conversion failed")?;
    if report.dry_run {
        info!("Dry run: {} file(s) would be converted", report.planned.len());
    } else {
        info!(
            "Converted {} file(s), removed {} original(s) in {} ms",
            report.converted.len(),
            report.removed.len(),
            report.duration_ms
        );
    }

    Ok(())
}
