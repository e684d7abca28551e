// SPDX-License-Identifier: MPL-2.0
//! Tokio-backed deferred actions.
//!
//! Each scheduled action is a spawned sleep that reports its handle on a
//! channel when the deadline passes; the shell forwards received handles
//! to `SlideshowController::timer_fired`. Cancellation aborts the task.
//! A cancellation racing the deadline may still deliver the handle; the
//! controller discards handles it no longer tracks.

use crate::application::port::{TimerHandle, TimerHost, TimerPurpose};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// [`TimerHost`] running on the tokio runtime.
///
/// Must be created and driven inside a runtime; `new` returns the host
/// together with the receiver the shell drains for fired handles.
#[derive(Debug)]
pub struct TokioTimerHost {
    next_id: u64,
    tx: mpsc::UnboundedSender<TimerHandle>,
    tasks: HashMap<u64, JoinHandle<()>>,
}

impl TokioTimerHost {
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerHandle>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                next_id: 0,
                tx,
                tasks: HashMap::new(),
            },
            rx,
        )
    }
}

impl TimerHost for TokioTimerHost {
    fn schedule(&mut self, delay: Duration, purpose: TimerPurpose) -> TimerHandle {
        // Drop bookkeeping for tasks that already fired.
        self.tasks.retain(|_, task| !task.is_finished());

        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        log::trace!("schedule {purpose:?} in {delay:?} as {handle:?}");

        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(handle);
        });
        self.tasks.insert(handle.0, task);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle.0) {
            task.abort();
        }
    }
}
