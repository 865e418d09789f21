//! Cancellation and deadline carrier for walks.
//!
//! The traversal engine never looks at the context it threads through. A
//! walk becomes cancellable only when a handler checks the context and
//! stops the walk through [`try_walk`](super::try_walk), typically by
//! putting [`check_cancelled`] at the head of the handler list.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::{Visitee, WalkError};

use super::handler::TryHandler;

/// A cloneable context carrying a cancellation flag and an optional deadline.
///
/// Clones share the cancellation flag, so a clone handed to another thread
/// can cancel a walk running on this one.
#[derive(Debug, Clone, Default)]
pub struct WalkContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl WalkContext {
    /// Creates a context that is never cancelled unless [`cancel`](Self::cancel) is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this context that also expires at `deadline`.
    ///
    /// An earlier existing deadline is kept.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(existing) if existing < deadline => existing,
            _ => deadline,
        };
        Self {
            cancelled: Arc::clone(&self.cancelled),
            deadline: Some(deadline),
        }
    }

    /// Returns a copy of this context that expires `timeout` from now.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Marks this context and every clone of it as cancelled.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            debug!("walk context cancelled");
        }
    }

    /// Returns true once [`cancel`](Self::cancel) has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Returns the deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns an error if the context is cancelled or past its deadline.
    ///
    /// Explicit cancellation takes precedence over deadline expiry.
    pub fn check(&self) -> Result<(), WalkError> {
        if self.is_cancelled() {
            return Err(WalkError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(WalkError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}

/// Returns a handler that stops a [`try_walk`](super::try_walk) once the
/// context is cancelled or past its deadline.
///
/// Place it first in the handler list so no other handler sees a node after
/// cancellation.
pub fn check_cancelled<'h, E>() -> TryHandler<'h, WalkContext, E>
where
    E: From<WalkError>,
{
    Box::new(|ctx: &WalkContext, _visitee: &Visitee| ctx.check().map_err(E::from))
}
