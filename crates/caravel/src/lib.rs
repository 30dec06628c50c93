//! Caravel: bulk media uploads to a Cloudinary-style asset store.
//!
//! This facade crate re-exports the public surface of the workspace:
//! the data model and seams ([`caravel_core`]), the signed upload
//! client ([`caravel_client`]), and the batch orchestrator and
//! artifact writer ([`caravel_batch`]).
//!
//! # Example
//!
//! ```no_run
//! use caravel::{
//!     ArtifactFormat, BatchUploader, CloudConfig, CloudinaryClient, FixedDelayPacer,
//!     Manifest, write_artifact,
//! };
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manifest = Manifest::load(None)?;
//!     let client = CloudinaryClient::new(CloudConfig::from_env()?);
//!     let pacer = FixedDelayPacer::new(Duration::from_secs(2));
//!
//!     let uploaded = BatchUploader::new(client, pacer)
//!         .run(manifest.descriptors())
//!         .await;
//!     write_artifact("uploaded_media.js", &uploaded, ArtifactFormat::EsModule)?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use caravel_batch::{ArtifactFormat, BatchUploader, DEFAULT_BATCH_SIZE, write_artifact};
pub use caravel_client::{CloudConfig, CloudinaryClient, TimestampSource, generate_signature};
pub use caravel_core::{
    FixedDelayPacer, Manifest, MediaDescriptor, Pacer, UploadOutcome, UploadResult, Uploader,
};
pub use caravel_error::{
    CaravelError, CaravelErrorKind, CaravelResult, ConfigError, HttpError, IoError, JsonError,
};
