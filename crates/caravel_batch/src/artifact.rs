//! Final artifact output.
//!
//! The run produces exactly one durable artifact, written once at the
//! very end: the list of successful uploads, either as an ES-module
//! constant suitable for static import from a site build, or as plain
//! JSON.

use caravel_core::UploadResult;
use caravel_error::{CaravelResult, IoError, JsonError};
use std::path::Path;
use tracing::{info, instrument};

/// Name of the exported constant in the ES-module format.
const EXPORT_NAME: &str = "uploadedMedia";

/// Serialization format for the output artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// `export const uploadedMedia = [...];` for static import
    EsModule,
    /// A plain JSON array
    Json,
}

/// Write the accumulated upload results to a single artifact file.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be
/// written.
///
/// # Examples
///
/// ```no_run
/// use caravel_batch::{ArtifactFormat, write_artifact};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// write_artifact("uploaded_media.js", &[], ArtifactFormat::EsModule)?;
/// # Ok(())
/// # }
/// ```
#[instrument(skip(path, results), fields(path = %path.as_ref().display(), count = results.len()))]
pub fn write_artifact(
    path: impl AsRef<Path>,
    results: &[UploadResult],
    format: ArtifactFormat,
) -> CaravelResult<()> {
    let json = serde_json::to_string_pretty(results)
        .map_err(|e| JsonError::new(format!("Failed to serialize results: {}", e)))?;

    let contents = match format {
        ArtifactFormat::EsModule => format!("export const {} = {};\n", EXPORT_NAME, json),
        ArtifactFormat::Json => format!("{}\n", json),
    };

    std::fs::write(path.as_ref(), contents).map_err(|e| {
        IoError::new(format!(
            "Failed to write artifact to {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;

    info!("Artifact written");
    Ok(())
}
