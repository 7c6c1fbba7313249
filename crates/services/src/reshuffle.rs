use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Awaitable reshuffle ticks, one per period.
///
/// The first tick arrives one full period after construction. Must be built
/// inside a Tokio runtime.
#[derive(Debug)]
pub struct ReshuffleSchedule {
    interval: Interval,
}

impl ReshuffleSchedule {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    /// Wait for the next tick.
    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }
}

/// A running reshuffle timer that can be stopped.
///
/// The task runs until [`cancel`](Self::cancel) is called or the handle is
/// dropped.
#[derive(Debug)]
pub struct ReshuffleTask {
    handle: JoinHandle<()>,
}

impl ReshuffleTask {
    /// Spawn a task calling `on_tick` with the running tick count once per
    /// period. Must be called inside a Tokio runtime.
    #[must_use]
    pub fn start<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(u64) + Send + 'static,
    {
        let mut schedule = ReshuffleSchedule::new(period);
        let handle = tokio::spawn(async move {
            let mut ticks = 0u64;
            loop {
                schedule.tick().await;
                ticks += 1;
                on_tick(ticks);
            }
        });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ReshuffleTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
