//! The uploader seam.

use crate::{MediaDescriptor, UploadOutcome};
use async_trait::async_trait;

/// A destination that can store one media asset.
///
/// Implementations absorb their own failures: `upload` is infallible by
/// contract and reports problems through [`UploadOutcome::Failed`], so
/// the batch orchestrator never has to treat a bad item as fatal.
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Attempt to store one asset, settling to an outcome either way.
    async fn upload(&self, descriptor: &MediaDescriptor) -> UploadOutcome;
}
