//! Walk error types.

use thiserror::Error;

/// Reasons a [`WalkContext`](crate::WalkContext) reports that a walk should
/// stop.
///
/// The traversal engine never produces these itself; handlers return them
/// from [`try_walk`](crate::try_walk) to abort the remaining traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WalkError {
    /// The context was cancelled explicitly.
    #[error("walk cancelled")]
    Cancelled,

    /// The context deadline passed.
    #[error("walk deadline exceeded")]
    DeadlineExceeded,
}
