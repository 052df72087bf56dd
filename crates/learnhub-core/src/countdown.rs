//! Cancellable one-second countdown schedule.
//!
//! A [`Countdown`] owns a tokio task that emits one tick per period over a
//! channel. Dropping the handle aborts the task, so no tick can arrive after
//! the owning session has stopped or been torn down.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

/// Period between countdown ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A running tick schedule.
#[derive(Debug)]
pub struct Countdown {
    task: JoinHandle<()>,
    ticks: mpsc::UnboundedReceiver<()>,
}

impl Countdown {
    /// Spawn the schedule on the current tokio runtime.
    ///
    /// Returns `None` outside a runtime; callers then drive ticks by hand.
    pub fn start(period: Duration) -> Option<Self> {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::warn!("no async runtime available, countdown ticks must be driven manually");
                return None;
            }
        };

        let (tx, ticks) = mpsc::unbounded_channel();
        let task = runtime.spawn(async move {
            // First tick one full period after start, not immediately.
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(?period, "countdown started");

        Some(Self { task, ticks })
    }

    /// Wait for the next tick. Returns `None` if the schedule has ended.
    pub async fn next_tick(&mut self) -> Option<()> {
        self.ticks.recv().await
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("countdown cancelled");
    }
}
