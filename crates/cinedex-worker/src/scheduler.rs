//! Movie generation scheduler: at most one active generation task.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tracing::info;

use cinedex_core::config::GeneratorConfig;
use cinedex_core::error::AppError;
use cinedex_realtime::NotificationHub;
use cinedex_service::MovieService;

use crate::task::{TaskHandle, spawn_repeating};

/// Owns the single background movie generation task.
#[derive(Debug)]
pub struct GenerationScheduler {
    movies: Arc<MovieService>,
    hub: Arc<NotificationHub>,
    config: GeneratorConfig,
    active: Mutex<Option<TaskHandle>>,
}

impl GenerationScheduler {
    /// Create a scheduler with no active task
    pub fn new(movies: Arc<MovieService>, hub: Arc<NotificationHub>, config: GeneratorConfig) -> Self {
        Self {
            movies,
            hub,
            config,
            active: Mutex::new(None),
        }
    }

    /// Start generating `count` movies per run, replacing any running task.
    ///
    /// Each run broadcasts a data-changed event after inserting.
    pub fn start(&self, count: usize) {
        let movies = Arc::clone(&self.movies);
        let hub = Arc::clone(&self.hub);

        let handle = spawn_repeating(
            Duration::from_secs(self.config.interval_seconds),
            self.config.repeat_count,
            move |run| {
                let movies = Arc::clone(&movies);
                let hub = Arc::clone(&hub);
                async move {
                    let created = movies.generate(count).await?;
                    let report = hub.notify_data_changed();
                    info!(
                        run,
                        generated = created.len(),
                        notified = report.delivered,
                        "Background generation run"
                    );
                    Ok::<(), AppError>(())
                }
            },
        );

        let previous = self.slot().replace(handle);
        if let Some(previous) = previous {
            previous.cancel();
            info!(
                completed_runs = previous.completed_runs(),
                "Replaced running generation task"
            );
        }
        info!(
            count,
            interval_seconds = self.config.interval_seconds,
            repeat_count = self.config.repeat_count,
            "Movie generation started"
        );
    }

    /// Cancel the active task. Returns `false` if none was running.
    pub fn stop(&self) -> bool {
        match self.slot().take() {
            Some(handle) => {
                let running = !handle.is_finished();
                handle.cancel();
                info!(completed_runs = handle.completed_runs(), "Movie generation stopped");
                running
            }
            None => false,
        }
    }

    /// Whether a task is currently running.
    pub fn is_running(&self) -> bool {
        self.slot()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Wait for the active task to finish on its own.
    pub async fn join_active(&self) -> Option<u32> {
        let handle = self.slot().take()?;
        Some(handle.join().await)
    }

    /// Cancel the active task and wait for it to exit.
    pub async fn shutdown(&self) {
        let active = self.slot().take();
        if let Some(handle) = active {
            handle.cancel();
            let runs = handle.join().await;
            info!(completed_runs = runs, "Generation task shut down");
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<TaskHandle>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
