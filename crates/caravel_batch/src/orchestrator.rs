//! The batch upload orchestrator.

use caravel_core::{MediaDescriptor, Pacer, UploadOutcome, UploadResult, Uploader};
use futures::future::join_all;
use tracing::{info, instrument, warn};

/// Default number of concurrent uploads per batch.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Uploads a descriptor list in fixed-size concurrent batches.
///
/// Batches run strictly one after another: every upload in a batch is
/// issued concurrently and the orchestrator waits for all of them to
/// settle before moving on (a join, not a race), so a slow item delays
/// its batch but aborts nothing. Between batches the [`Pacer`] pauses
/// the whole run to respect the remote rate limit; there is no pause
/// after the final batch.
///
/// Individual failures are absorbed by the [`Uploader`] and surface
/// only as missing entries in the returned list, so the run itself
/// never fails on a bad item. There is no retry and no way to abort a
/// run in progress.
///
/// # Example
/// ```no_run
/// use caravel_batch::BatchUploader;
/// use caravel_client::{CloudConfig, CloudinaryClient};
/// use caravel_core::{FixedDelayPacer, Manifest};
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let manifest = Manifest::load(None)?;
///     let client = CloudinaryClient::new(CloudConfig::from_env()?);
///     let pacer = FixedDelayPacer::new(Duration::from_secs(2));
///
///     let uploader = BatchUploader::new(client, pacer);
///     let uploaded = uploader.run(manifest.descriptors()).await;
///     println!("{} assets stored", uploaded.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BatchUploader<U, P> {
    uploader: U,
    pacer: P,
    batch_size: usize,
}

impl<U, P> BatchUploader<U, P>
where
    U: Uploader,
    P: Pacer,
{
    /// Create an orchestrator with the default batch size.
    pub fn new(uploader: U, pacer: P) -> Self {
        Self {
            uploader,
            pacer,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Override the batch size. A size of zero is clamped to one.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// The configured batch size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Upload every descriptor, returning the successes in input order
    /// (failures are dropped, not retried).
    #[instrument(skip(self, descriptors), fields(total = descriptors.len(), batch_size = self.batch_size))]
    pub async fn run(&self, descriptors: &[MediaDescriptor]) -> Vec<UploadResult> {
        let total_batches = descriptors.len().div_ceil(self.batch_size);
        let mut uploaded = Vec::new();

        for (index, batch) in descriptors.chunks(self.batch_size).enumerate() {
            info!(
                batch = index + 1,
                total_batches,
                size = batch.len(),
                "Uploading batch"
            );

            // join_all preserves input order, so within-batch results
            // line up with their descriptors regardless of completion
            // order.
            let outcomes = join_all(batch.iter().map(|d| self.uploader.upload(d))).await;

            for outcome in outcomes {
                match outcome {
                    UploadOutcome::Uploaded(result) => uploaded.push(result),
                    UploadOutcome::Failed { id, title, reason } => {
                        warn!(%id, %title, %reason, "Dropping failed upload");
                    }
                }
            }

            info!(batch = index + 1, "Batch completed");

            if index + 1 < total_batches {
                self.pacer.pause().await;
            }
        }

        info!(total = uploaded.len(), "All uploads completed");
        uploaded
    }
}
