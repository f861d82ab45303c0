use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Raw configuration as defined in a TOML or JSON file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub carousel: FileCarouselConfig,
    #[serde(default)]
    pub pager: FilePagerConfig,
    #[serde(default)]
    pub slideshow: FileSlideshowConfig,
    #[serde(default)]
    pub lightbox: FileLightboxConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCarouselConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_px: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_px_per_s: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drag_threshold_px: Option<f32>,
    /// Humantime string, e.g. `"350ms"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fling_decay: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fling_sample_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_interval: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FilePagerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_size: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileSlideshowConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileLightboxConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_text: Option<String>,
}

/// Raw values taken from `FOLIO_*` environment variables. Parsing happens
/// during composition so a malformed value can be reported with its key.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub carousel_spacing: Option<String>,
    pub carousel_speed: Option<String>,
    pub carousel_drag_threshold: Option<String>,
    pub carousel_fling_decay: Option<String>,
    pub carousel_frame_interval: Option<String>,
    pub pager_per_page: Option<String>,
    pub pager_window: Option<String>,
    pub slideshow_interval: Option<String>,
    pub slideshow_autoplay: Option<String>,
    pub site_url: Option<String>,
    pub share_text: Option<String>,
}

impl EnvConfig {
    pub const CONFIG_PATH: &'static str = "FOLIO_CONFIG_PATH";
    pub const CAROUSEL_SPACING: &'static str = "FOLIO_CAROUSEL_SPACING";
    pub const CAROUSEL_SPEED: &'static str = "FOLIO_CAROUSEL_SPEED";
    pub const CAROUSEL_DRAG_THRESHOLD: &'static str =
        "FOLIO_CAROUSEL_DRAG_THRESHOLD";
    pub const CAROUSEL_FLING_DECAY: &'static str = "FOLIO_CAROUSEL_FLING_DECAY";
    pub const CAROUSEL_FRAME_INTERVAL: &'static str =
        "FOLIO_CAROUSEL_FRAME_INTERVAL";
    pub const PAGER_PER_PAGE: &'static str = "FOLIO_PAGER_PER_PAGE";
    pub const PAGER_WINDOW: &'static str = "FOLIO_PAGER_WINDOW";
    pub const SLIDESHOW_INTERVAL: &'static str = "FOLIO_SLIDESHOW_INTERVAL";
    pub const SLIDESHOW_AUTOPLAY: &'static str = "FOLIO_SLIDESHOW_AUTOPLAY";
    pub const SITE_URL: &'static str = "FOLIO_SITE_URL";
    pub const SHARE_TEXT: &'static str = "FOLIO_SHARE_TEXT";

    /// Read the process environment.
    pub fn gather() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build from explicit key/value pairs. Blank values count as unset.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, v)| k.starts_with("FOLIO_") && !v.trim().is_empty())
            .collect();
        let mut take = |key: &str| map.remove(key).map(|v| v.trim().to_string());

        Self {
            config_path: take(Self::CONFIG_PATH).map(PathBuf::from),
            carousel_spacing: take(Self::CAROUSEL_SPACING),
            carousel_speed: take(Self::CAROUSEL_SPEED),
            carousel_drag_threshold: take(Self::CAROUSEL_DRAG_THRESHOLD),
            carousel_fling_decay: take(Self::CAROUSEL_FLING_DECAY),
            carousel_frame_interval: take(Self::CAROUSEL_FRAME_INTERVAL),
            pager_per_page: take(Self::PAGER_PER_PAGE),
            pager_window: take(Self::PAGER_WINDOW),
            slideshow_interval: take(Self::SLIDESHOW_INTERVAL),
            slideshow_autoplay: take(Self::SLIDESHOW_AUTOPLAY),
            site_url: take(Self::SITE_URL),
            share_text: take(Self::SHARE_TEXT),
        }
    }
}
