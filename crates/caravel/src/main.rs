//! Caravel CLI binary.
//!
//! Reads a JSON manifest of media descriptors, uploads each asset to
//! the configured remote store in fixed-size concurrent batches with a
//! pause between batches, and writes the successful uploads to a
//! single artifact file.

use caravel_batch::{BatchUploader, write_artifact};
use caravel_client::{CloudConfig, CloudinaryClient};
use caravel_core::{FixedDelayPacer, Manifest};
use clap::Parser;
use std::time::Duration;
use tracing::info;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::Cli;

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Pull credentials from .env if present
    dotenvy::dotenv().ok();

    let config = match &cli.config {
        Some(path) => CloudConfig::from_file(path)?,
        None => CloudConfig::from_env()?,
    };

    let manifest = Manifest::load(cli.manifest.as_deref())?;
    info!(
        descriptors = manifest.len(),
        batch_size = cli.batch_size,
        "Starting bulk upload"
    );

    let client = CloudinaryClient::new(config);
    let pacer = FixedDelayPacer::new(Duration::from_millis(cli.delay_ms));

    let uploaded = BatchUploader::new(client, pacer)
        .with_batch_size(cli.batch_size)
        .run(manifest.descriptors())
        .await;

    write_artifact(&cli.output, &uploaded, cli.format.into())?;

    info!(
        uploaded = uploaded.len(),
        skipped = manifest.len() - uploaded.len(),
        output = %cli.output.display(),
        "Run complete"
    );

    Ok(())
}
