//! Fixed-cadence frame source for hosts without a display-synced callback.
//!
//! A spawned task sends one timestamp per interval. Pausing stops the stream
//! without tearing the task down, matching how the carousel cancels its frame
//! callback on drag start and requests it again on release.

use std::time::{Duration, Instant};

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Shortest cadence the loop runs at.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug)]
pub struct FrameLoop {
    paused: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl FrameLoop {
    /// Spawn on the current tokio runtime. The task ends when `frames` is
    /// dropped or [`FrameLoop::stop`] is called. Intervals below
    /// [`MIN_INTERVAL`] are raised to it.
    pub fn spawn(interval: Duration, frames: mpsc::Sender<Instant>) -> Self {
        let interval = interval.max(MIN_INTERVAL);
        let (paused, mut paused_rx) = watch::channel(false);
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                if *paused_rx.borrow_and_update() {
                    if paused_rx.changed().await.is_err() {
                        break;
                    }
                    ticker.reset();
                    continue;
                }
                tokio::select! {
                    at = ticker.tick() => {
                        if frames.send(at.into_std()).await.is_err() {
                            log::debug!("frame receiver dropped; stopping frame loop");
                            break;
                        }
                    }
                    changed = paused_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
        });
        Self { paused, handle }
    }

    pub fn pause(&self) {
        self.paused.send_replace(true);
    }

    pub fn resume(&self) {
        self.paused.send_replace(false);
    }

    pub fn is_paused(&self) -> bool {
        *self.paused.borrow()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}
