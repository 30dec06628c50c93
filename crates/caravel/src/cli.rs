//! CLI argument definitions.

use caravel_batch::ArtifactFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Caravel - bulk media uploads to a Cloudinary-style asset store
#[derive(Parser, Debug)]
#[command(name = "caravel")]
#[command(about = "Upload a manifest of media in signed, rate-limited batches", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the JSON manifest (defaults to ./manifest.json, then
    /// the bundled sample)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Path to a TOML credentials file (defaults to environment
    /// variables)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of concurrent uploads per batch
    #[arg(long, default_value_t = caravel_batch::DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Pause between batches, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub delay_ms: u64,

    /// Where to write the final artifact
    #[arg(long, default_value = "uploaded_media.js")]
    pub output: PathBuf,

    /// Artifact format
    #[arg(long, default_value = "es-module")]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Artifact format choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `export const uploadedMedia = [...];` for static import
    EsModule,
    /// A plain JSON array
    Json,
}

impl From<OutputFormat> for ArtifactFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::EsModule => ArtifactFormat::EsModule,
            OutputFormat::Json => ArtifactFormat::Json,
        }
    }
}
