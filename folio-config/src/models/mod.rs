use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::constants;

/// Fully resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub carousel: CarouselSettings,
    pub pager: PagerSettings,
    pub slideshow: SlideshowSettings,
    pub lightbox: LightboxSettings,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSettings {
    pub spacing_px: f32,
    pub speed_px_per_s: f32,
    pub drag_threshold_px: f32,
    pub fling_decay: Duration,
    pub fling_sample_window: Duration,
    pub frame_interval: Duration,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        use constants::carousel as c;
        Self {
            spacing_px: c::SPACING_PX,
            speed_px_per_s: c::SPEED_PX_PER_S,
            drag_threshold_px: c::DRAG_THRESHOLD_PX,
            fling_decay: c::FLING_DECAY,
            fling_sample_window: c::FLING_SAMPLE_WINDOW,
            frame_interval: c::FRAME_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerSettings {
    pub per_page: usize,
    pub window_size: usize,
}

impl Default for PagerSettings {
    fn default() -> Self {
        Self {
            per_page: constants::pager::PER_PAGE,
            window_size: constants::pager::WINDOW_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideshowSettings {
    pub interval: Duration,
    pub autoplay: bool,
}

impl Default for SlideshowSettings {
    fn default() -> Self {
        Self {
            interval: constants::slideshow::INTERVAL,
            autoplay: constants::slideshow::AUTOPLAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightboxSettings {
    /// Public URL of the page, used as the link in share targets.
    pub site_url: Option<Url>,
    pub share_text: String,
}

impl Default for LightboxSettings {
    fn default() -> Self {
        Self {
            site_url: None,
            share_text: constants::lightbox::SHARE_TEXT.to_string(),
        }
    }
}

/// Where the configuration came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
