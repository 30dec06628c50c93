//! Per-item upload outcome.

use crate::UploadResult;

/// Outcome of one upload attempt.
///
/// Failure is an ordinary value here, not an error: the orchestrator
/// pattern-matches on the outcome and drops failures from the final
/// list instead of catching exceptions at the boundary.
///
/// # Examples
///
/// ```
/// use caravel_core::UploadOutcome;
///
/// let outcome = UploadOutcome::Failed {
///     id: "abc".to_string(),
///     title: "Ferrari".to_string(),
///     reason: "upload endpoint returned 420".to_string(),
/// };
///
/// assert!(outcome.as_uploaded().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The asset was stored; carries the final result record
    Uploaded(UploadResult),
    /// The upload failed; the item is logged and dropped, never retried
    Failed {
        /// Identifier of the descriptor that failed
        id: String,
        /// Display caption, for log lines
        title: String,
        /// Transport/status/parse detail
        reason: String,
    },
}

impl UploadOutcome {
    /// The result record, if the upload succeeded.
    pub fn as_uploaded(&self) -> Option<&UploadResult> {
        match self {
            UploadOutcome::Uploaded(result) => Some(result),
            UploadOutcome::Failed { .. } => None,
        }
    }

    /// Consume the outcome, keeping the result record if present.
    pub fn into_uploaded(self) -> Option<UploadResult> {
        match self {
            UploadOutcome::Uploaded(result) => Some(result),
            UploadOutcome::Failed { .. } => None,
        }
    }
}
