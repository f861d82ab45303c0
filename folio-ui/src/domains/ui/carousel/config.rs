//! Configuration for the carousel engine
//!
//! Pixel distances and rates are in host units (CSS px in a browser).

use folio_config::{CarouselSettings, constants::carousel as defaults};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Distance between neighbouring item centers.
    pub spacing: f32,
    /// Auto-advance rate in px/s. Positive values move items leftwards.
    pub speed_px_per_s: f32,
    /// Pointer travel past which a press counts as a drag.
    pub drag_threshold_px: f32,
    /// Decay time constant (ms) of the release fling. 0 disables the fling.
    pub fling_decay_tau_ms: u64,
    /// Only pointer samples this recent (ms) feed the release velocity.
    pub fling_sample_window_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            spacing: defaults::SPACING_PX,
            speed_px_per_s: defaults::SPEED_PX_PER_S,
            drag_threshold_px: defaults::DRAG_THRESHOLD_PX,
            fling_decay_tau_ms: duration_ms(defaults::FLING_DECAY),
            fling_sample_window_ms: duration_ms(defaults::FLING_SAMPLE_WINDOW),
        }
    }
}

impl CarouselConfig {
    /// Build from loaded settings.
    pub fn from_settings(settings: &CarouselSettings) -> Self {
        Self {
            spacing: settings.spacing_px,
            speed_px_per_s: settings.speed_px_per_s,
            drag_threshold_px: settings.drag_threshold_px,
            fling_decay_tau_ms: duration_ms(settings.fling_decay),
            fling_sample_window_ms: duration_ms(settings.fling_sample_window),
        }
    }

    /// Same config without time-based motion; handy for hosts that only
    /// want drag and arrow navigation.
    pub fn stationary(mut self) -> Self {
        self.speed_px_per_s = 0.0;
        self
    }

    pub(crate) fn fling_tau_secs(&self) -> Option<f32> {
        (self.fling_decay_tau_ms > 0)
            .then(|| self.fling_decay_tau_ms as f32 / 1000.0)
    }

    pub(crate) fn sample_window(&self) -> Duration {
        Duration::from_millis(self.fling_sample_window_ms)
    }
}

fn duration_ms(d: Duration) -> u64 {
    d.as_millis().min(u64::MAX as u128) as u64
}
