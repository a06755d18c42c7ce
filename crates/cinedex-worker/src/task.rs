//! Repeating task: runs a job a bounded number of times on an interval.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;

use cinedex_core::result::AppResult;

/// Handle to a task started by [`spawn_repeating`].
#[derive(Debug)]
pub struct TaskHandle {
    cancel: watch::Sender<bool>,
    completed: Arc<AtomicU32>,
    join: JoinHandle<u32>,
}

impl TaskHandle {
    /// Stop the task before its next run. A run in progress finishes.
    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
    }

    /// Runs finished so far.
    pub fn completed_runs(&self) -> u32 {
        self.completed.load(Ordering::SeqCst)
    }

    /// Whether the task has exited.
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait for the task to exit and return its completed run count.
    pub async fn join(self) -> u32 {
        let completed = self.completed;
        match self.join.await {
            Ok(runs) => runs,
            Err(e) => {
                tracing::error!(error = %e, "Repeating task panicked");
                completed.load(Ordering::SeqCst)
            }
        }
    }
}

/// Spawn `job` to run up to `repeat_count` times.
///
/// The first run starts immediately; later runs wait `interval` after the
/// previous one. A failed run is logged and still counts.
pub fn spawn_repeating<F, Fut>(interval: Duration, repeat_count: u32, mut job: F) -> TaskHandle
where
    F: FnMut(u32) -> Fut + Send + 'static,
    Fut: Future<Output = AppResult<()>> + Send + 'static,
{
    let (cancel_tx, mut cancel_rx) = watch::channel(false);
    let completed = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&completed);

    let join = tokio::spawn(async move {
        let mut runs = 0;
        while runs < repeat_count {
            if *cancel_rx.borrow() {
                break;
            }

            if let Err(e) = job(runs + 1).await {
                tracing::error!(run = runs + 1, error = %e, "Repeating task run failed");
            }
            runs += 1;
            counter.store(runs, Ordering::SeqCst);

            if runs >= repeat_count {
                break;
            }

            tokio::select! {
                changed = cancel_rx.changed() => {
                    if changed.is_err() || *cancel_rx.borrow() {
                        break;
                    }
                }
                _ = time::sleep(interval) => {}
            }
        }

        tracing::debug!(runs, repeat_count, "Repeating task finished");
        runs
    });

    TaskHandle {
        cancel: cancel_tx,
        completed,
        join,
    }
}
