//! One-shot removal timers for displayed elements.
//!
//! Every shown message gets exactly one timer task. When it fires, the
//! element id is delivered on the expiry channel and the app removes that
//! element from the surface. There is no retry, rescheduling, or batching.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use super::ElementId;

/// Scheduling failed because nothing is listening for expiries anymore.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// The expiry receiver was dropped, so a removal could never be
    /// delivered. Surfaces must outlive the timers aimed at them.
    #[error("expiry channel is closed")]
    Closed,
}

/// Hands out one-shot removal timers and the channel their expiries
/// arrive on.
#[derive(Debug, Clone)]
pub struct RemovalScheduler {
    tx: mpsc::UnboundedSender<ElementId>,
}

impl RemovalScheduler {
    /// Creates a scheduler and the receiving end the app drains in its
    /// tick loop.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ElementId>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Arms a single timer that delivers `id` once, `after` from now.
    pub fn schedule(&self, id: ElementId, after: Duration) -> Result<RemovalHandle, ScheduleError> {
        if self.tx.is_closed() {
            return Err(ScheduleError::Closed);
        }

        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            // The receiver may have been torn down while we slept.
            if tx.send(id).is_err() {
                tracing::warn!("expiry for {} had no receiver", id);
            }
        });

        Ok(RemovalHandle {
            task: task.abort_handle(),
        })
    }
}

/// Cancellation handle for an armed timer.
///
/// Dropping the handle detaches it: the timer still fires. The show path
/// relies on that, since expiry must not depend on anyone keeping the
/// handle around.
#[derive(Debug)]
pub struct RemovalHandle {
    task: AbortHandle,
}

impl RemovalHandle {
    /// Stops the timer if it has not fired yet. A no-op afterwards.
    #[allow(dead_code)] // No show path cancels yet
    pub fn cancel(&self) {
        self.task.abort();
    }
}
