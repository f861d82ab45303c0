//! Compiled defaults used when neither the config file nor the environment
//! provides a value.

use std::time::Duration;

/// Carousel ("companies I worked for") defaults.
pub mod carousel {
    use super::Duration;

    /// Distance between neighbouring bubble centers (px).
    pub const SPACING_PX: f32 = 180.0;
    /// Auto-advance rate (px/s). Positive values scroll leftwards.
    pub const SPEED_PX_PER_S: f32 = 40.0;
    /// Pointer travel past which a press counts as a drag (px).
    pub const DRAG_THRESHOLD_PX: f32 = 5.0;
    /// Decay time constant for the release fling.
    pub const FLING_DECAY: Duration = Duration::from_millis(350);
    /// Only pointer samples this recent feed the release velocity.
    pub const FLING_SAMPLE_WINDOW: Duration = Duration::from_millis(100);
    /// Frame cadence for hosts without a display-synced callback (~60 Hz).
    pub const FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);
}

/// Charity list pagination defaults.
pub mod pager {
    pub const PER_PAGE: usize = 10;
    /// Numbered buttons shown around the current page.
    pub const WINDOW_SIZE: usize = 3;
}

/// Content-card media slideshow defaults.
pub mod slideshow {
    use super::Duration;

    pub const INTERVAL: Duration = Duration::from_secs(5);
    pub const AUTOPLAY: bool = true;
    /// Intervals below this trip a config warning.
    pub const MIN_COMFORTABLE_INTERVAL: Duration = Duration::from_millis(1500);
}

/// Lightbox share defaults.
pub mod lightbox {
    pub const SHARE_TEXT: &str = "Take a look at this";
}

/// Files probed when no explicit path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["folio.toml", "config/folio.toml"];
