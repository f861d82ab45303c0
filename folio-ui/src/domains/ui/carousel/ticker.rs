//! Pausable frame ticker.
//!
//! Hosts call [`FrameTicker::advance`] with the timestamp of every frame
//! callback. The ticker hands back the elapsed time since the previous frame,
//! or nothing while paused and on the first frame after a (re)start.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct FrameTicker {
    paused: bool,
    last_frame: Option<Instant>,
}

impl FrameTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Time since the previous frame, if running and a baseline exists.
    pub fn advance(&mut self, now: Instant) -> Option<Duration> {
        if self.paused {
            return None;
        }
        let last = self.last_frame.replace(now)?;
        let dt = now.saturating_duration_since(last);
        (!dt.is_zero()).then_some(dt)
    }

    /// Stop producing time steps until [`FrameTicker::resume`].
    pub fn pause(&mut self) {
        self.paused = true;
        self.last_frame = None;
    }

    /// Start again with a fresh baseline so the gap spent paused is skipped.
    pub fn resume(&mut self) {
        self.paused = false;
        self.last_frame = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_only_sets_the_baseline() {
        let t0 = Instant::now();
        let mut ticker = FrameTicker::new();
        assert_eq!(ticker.advance(t0), None);
        assert_eq!(
            ticker.advance(t0 + Duration::from_millis(16)),
            Some(Duration::from_millis(16))
        );
    }

    #[test]
    fn resume_skips_the_paused_gap() {
        let t0 = Instant::now();
        let mut ticker = FrameTicker::new();
        ticker.advance(t0);
        ticker.pause();
        assert_eq!(ticker.advance(t0 + Duration::from_secs(1)), None);
        ticker.resume();
        assert_eq!(ticker.advance(t0 + Duration::from_secs(5)), None);
        assert_eq!(
            ticker.advance(t0 + Duration::from_millis(5016)),
            Some(Duration::from_millis(16))
        );
    }

    #[test]
    fn repeated_timestamps_yield_no_step() {
        let t0 = Instant::now();
        let mut ticker = FrameTicker::new();
        ticker.advance(t0);
        assert_eq!(ticker.advance(t0), None);
    }
}
