//! Batch orchestration and artifact output for the Caravel bulk media
//! uploader.
//!
//! The orchestrator partitions the manifest into fixed-size batches,
//! runs each batch's uploads concurrently, pauses between batches, and
//! writes the accumulated successes to a single artifact at the end.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod orchestrator;

pub use artifact::{ArtifactFormat, write_artifact};
pub use orchestrator::{BatchUploader, DEFAULT_BATCH_SIZE};
