//! Release fling: pointer velocity at release decaying back to zero.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Below this speed (px/s) a fling is considered finished.
const MIN_FLING_SPEED: f32 = 1.0;
/// Upper bound on retained pointer samples.
const MAX_SAMPLES: usize = 32;

/// Recent pointer positions used to estimate release velocity.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    samples: VecDeque<(Instant, f32)>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, at: Instant, x: f32) {
        if self.samples.len() == MAX_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back((at, x));
    }

    /// Most recent recorded position.
    pub fn last_x(&self) -> Option<f32> {
        self.samples.back().map(|&(_, x)| x)
    }

    /// Velocity in px/s over the samples no older than `window` before `now`.
    /// Fewer than two usable samples means the pointer was still: 0.
    pub fn velocity(&self, now: Instant, window: Duration) -> f32 {
        let mut recent = self
            .samples
            .iter()
            .filter(|(t, _)| now.saturating_duration_since(*t) <= window);
        let Some(&(t_first, x_first)) = recent.next() else {
            return 0.0;
        };
        let Some(&(t_last, x_last)) = recent.last() else {
            return 0.0;
        };
        let dt = t_last.saturating_duration_since(t_first).as_secs_f32();
        if dt <= f32::EPSILON {
            return 0.0;
        }
        (x_last - x_first) / dt
    }
}

/// Exponentially decaying velocity applied on top of auto-advance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fling {
    velocity: f32,
}

impl Fling {
    pub fn is_active(&self) -> bool {
        self.velocity != 0.0
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn launch(&mut self, velocity: f32) {
        self.velocity = if velocity.is_finite() && velocity.abs() >= MIN_FLING_SPEED {
            velocity
        } else {
            0.0
        };
    }

    pub fn cancel(&mut self) {
        self.velocity = 0.0;
    }

    /// Displacement over `dt` with time constant `tau_s`, integrated exactly
    /// so the result does not depend on frame rate.
    pub fn step(&mut self, dt: Duration, tau_s: f32) -> f32 {
        if !self.is_active() {
            return 0.0;
        }
        let dt_s = dt.as_secs_f32();
        let decay = (-dt_s / tau_s).exp();
        let displacement = self.velocity * tau_s * (1.0 - decay);
        self.velocity *= decay;
        if self.velocity.abs() < MIN_FLING_SPEED {
            self.velocity = 0.0;
        }
        displacement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_uses_only_recent_samples() {
        let t0 = Instant::now();
        let mut tracker = VelocityTracker::new();
        tracker.record(t0, 0.0);
        tracker.record(t0 + Duration::from_millis(200), 100.0);
        tracker.record(t0 + Duration::from_millis(250), 130.0);
        tracker.record(t0 + Duration::from_millis(300), 160.0);

        let v = tracker.velocity(
            t0 + Duration::from_millis(300),
            Duration::from_millis(100),
        );
        assert!((v - 600.0).abs() < 1.0, "{v}");
    }

    #[test]
    fn still_pointer_has_no_velocity() {
        let t0 = Instant::now();
        let mut tracker = VelocityTracker::new();
        tracker.record(t0, 10.0);
        assert_eq!(tracker.velocity(t0, Duration::from_millis(100)), 0.0);
        // Samples too old for the window.
        tracker.record(t0 + Duration::from_millis(10), 40.0);
        assert_eq!(tracker.last_x(), Some(40.0));
        assert_eq!(
            tracker.velocity(
                t0 + Duration::from_secs(1),
                Duration::from_millis(100)
            ),
            0.0
        );
    }

    #[test]
    fn fling_decays_to_rest() {
        let mut fling = Fling::default();
        fling.launch(500.0);
        let mut travelled = 0.0;
        for _ in 0..600 {
            travelled += fling.step(Duration::from_millis(16), 0.35);
        }
        assert!(!fling.is_active());
        // Total travel approaches v * tau.
        assert!((travelled - 175.0).abs() < 2.0, "{travelled}");
    }

    #[test]
    fn tiny_launch_is_ignored() {
        let mut fling = Fling::default();
        fling.launch(0.5);
        assert!(!fling.is_active());
        fling.launch(f32::INFINITY);
        assert!(!fling.is_active());
    }
}
