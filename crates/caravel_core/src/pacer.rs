//! Inter-batch pacing seam.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Pause between batches.
///
/// The remote store rate-limits bulk traffic, so the orchestrator
/// pauses between batches. The pause lives behind a trait so tests can
/// substitute a recording no-op and run without wall-clock delay.
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Suspend the orchestrator until the next batch may start.
    async fn pause(&self);
}

/// Fixed-duration pacer backed by `tokio::time::sleep`.
///
/// This is the production pacer: an unconditional fixed-window delay,
/// not adaptive to remote feedback.
///
/// # Examples
///
/// ```
/// use caravel_core::FixedDelayPacer;
/// use std::time::Duration;
///
/// let pacer = FixedDelayPacer::new(Duration::from_secs(2));
/// assert_eq!(pacer.delay(), Duration::from_secs(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDelayPacer {
    delay: Duration,
}

impl FixedDelayPacer {
    /// Create a pacer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Pacer for FixedDelayPacer {
    async fn pause(&self) {
        debug!(delay_ms = self.delay.as_millis() as u64, "Pausing before next batch");
        tokio::time::sleep(self.delay).await;
    }
}
