//! Periodic tick source for the timer drivers.
//!
//! A [`Ticker`] is a tokio task feeding a channel at a fixed period. A
//! [`TickSlot`] owns at most one of them: arming always tears down the
//! previous ticker first, and dropping the slot aborts whatever is running.
//! Both must be armed from inside a tokio runtime.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::{Instant, MissedTickBehavior};

const TICK_BUFFER: usize = 64;

pub struct Ticker {
    rx: mpsc::Receiver<Instant>,
    task: JoinHandle<()>,
}

impl Ticker {
    /// Start emitting one tick per `period`, the first one after a full period.
    pub fn spawn(period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(TICK_BUFFER);
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval.tick().await;

            loop {
                let at = interval.tick().await;
                if tx.send(at).await.is_err() {
                    break;
                }
            }
        });
        Self { rx, task }
    }

    /// Wait for the next tick. `None` once the task is gone.
    pub async fn tick(&mut self) -> Option<Instant> {
        self.rx.recv().await
    }

    pub fn abort_handle(&self) -> AbortHandle {
        self.task.abort_handle()
    }

    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Holder for the single pending ticker of one timer instance.
pub struct TickSlot {
    period: Duration,
    ticker: Option<Ticker>,
}

impl TickSlot {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            ticker: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.ticker.is_some()
    }

    /// Replace any running ticker with a fresh one.
    pub fn arm(&mut self) {
        self.disarm();
        self.ticker = Some(Ticker::spawn(self.period));
        tracing::trace!(period_ms = self.period.as_millis() as u64, "tick slot armed");
    }

    pub fn disarm(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
            tracing::trace!("tick slot disarmed");
        }
    }

    /// Arm or disarm so that ticks flow iff `running`.
    /// An already-armed slot keeps its ticker and phase.
    pub fn sync(&mut self, running: bool) {
        match (running, self.is_armed()) {
            (true, false) => self.arm(),
            (false, true) => self.disarm(),
            _ => {}
        }
    }

    /// Resolve on the next tick. Never resolves while disarmed, so it can
    /// sit in a `select!` next to other event sources.
    pub async fn next(&mut self) {
        loop {
            match self.ticker.as_mut() {
                Some(ticker) => {
                    if ticker.tick().await.is_some() {
                        return;
                    }
                    self.ticker = None;
                }
                None => std::future::pending::<()>().await,
            }
        }
    }

    #[cfg(test)]
    fn abort_handle(&self) -> Option<AbortHandle> {
        self.ticker.as_ref().map(Ticker::abort_handle)
    }
}

impl Drop for TickSlot {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn settle(handle: &AbortHandle) {
        for _ in 0..16 {
            if handle.is_finished() {
                return;
            }
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_emits_once_per_period() {
        let start = Instant::now();
        let mut ticker = Ticker::spawn(Duration::from_millis(10));
        for _ in 0..3 {
            ticker.tick().await.unwrap();
        }
        assert_eq!(start.elapsed(), Duration::from_millis(30));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_ticker_aborts_task() {
        let ticker = Ticker::spawn(Duration::from_secs(1));
        let handle = ticker.abort_handle();
        drop(ticker);
        settle(&handle).await;
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn rearming_cancels_previous_ticker() {
        let mut slot = TickSlot::new(Duration::from_secs(1));
        slot.arm();
        let first = slot.abort_handle().unwrap();
        slot.arm();
        let second = slot.abort_handle().unwrap();
        settle(&first).await;
        assert!(first.is_finished());
        assert!(!second.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn disarmed_slot_never_ticks() {
        let mut slot = TickSlot::new(Duration::from_millis(10));
        slot.sync(true);
        slot.next().await;
        slot.sync(false);
        assert!(!slot.is_armed());
        let waited = tokio::time::timeout(Duration::from_secs(5), slot.next()).await;
        assert!(waited.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_slot_aborts_ticker() {
        let mut slot = TickSlot::new(Duration::from_secs(1));
        slot.sync(true);
        let handle = slot.abort_handle().unwrap();
        drop(slot);
        settle(&handle).await;
        assert!(handle.is_finished());
    }
}
