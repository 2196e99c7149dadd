//! Photo grid refresh task
//!
//! A repeating tokio timer publishes a freshly generated [`PhotoBatch`] through
//! a `watch` channel. The task lives exactly as long as its
//! [`PhotoRefreshHandle`]: dropping the handle aborts it, so every exit path
//! of the owner cancels the timer.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::photos::PhotoBatch;

/// Default refresh period
pub const DEFAULT_PHOTO_REFRESH_PERIOD: Duration = Duration::from_secs(5);

/// Shortest accepted period; `interval_at` rejects zero
const MIN_PERIOD: Duration = Duration::from_millis(100);

/// Spawns the refresh task
pub struct PhotoRefresher;

impl PhotoRefresher {
    /// Start publishing a new batch every `period` on `runtime`
    ///
    /// The first refresh happens one full period after start; the batch
    /// created at start-up is the controller's initial one.
    #[must_use = "dropping the handle stops the refresh task"]
    pub fn start(runtime: &Handle, period: Duration) -> PhotoRefreshHandle {
        let period = period.max(MIN_PERIOD);
        let (tx, rx) = watch::channel(PhotoBatch::generate(0));

        let task = runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            let mut generation = 0_u64;
            loop {
                ticker.tick().await;
                generation += 1;
                if tx.send(PhotoBatch::generate(generation)).is_err() {
                    // 所有接收端已关闭
                    break;
                }
            }
        });

        log::info!("Photo refresh started, period {}ms", period.as_millis());

        PhotoRefreshHandle { task, rx, period }
    }
}

/// Owning handle of a running refresh task
pub struct PhotoRefreshHandle {
    task: JoinHandle<()>,
    rx: watch::Receiver<PhotoBatch>,
    period: Duration,
}

impl PhotoRefreshHandle {
    /// The batch published since the last call, if any
    pub fn try_latest(&mut self) -> Option<PhotoBatch> {
        match self.rx.has_changed() {
            Ok(true) => Some(self.rx.borrow_and_update().clone()),
            _ => None,
        }
    }

    /// Additional receiver for the published batches
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PhotoBatch> {
        self.rx.clone()
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop the task now instead of at drop time
    pub fn stop(self) {
        // Cancellation happens in `Drop`
        drop(self);
    }
}

impl Drop for PhotoRefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
        log::info!("Photo refresh stopped");
    }
}
