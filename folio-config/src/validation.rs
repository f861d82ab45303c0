use thiserror::Error;

use crate::constants;
use crate::models::Config;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("carousel spacing must be a positive number of pixels, got {0}")]
    NonPositiveSpacing(f32),
    #[error("carousel {field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("pager page size must be at least 1")]
    ZeroPageSize,
    #[error("pager window must show at least one page button")]
    ZeroWindowSize,
    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();
    let carousel = &config.carousel;

    for (field, value) in [
        ("spacing_px", carousel.spacing_px),
        ("speed_px_per_s", carousel.speed_px_per_s),
        ("drag_threshold_px", carousel.drag_threshold_px),
    ] {
        if !value.is_finite() {
            return Err(ConfigGuardRailError::NonFinite { field, value });
        }
    }
    if carousel.spacing_px <= 0.0 {
        return Err(ConfigGuardRailError::NonPositiveSpacing(
            carousel.spacing_px,
        ));
    }
    if carousel.frame_interval.is_zero() {
        return Err(ConfigGuardRailError::ZeroDuration {
            field: "carousel.frame_interval",
        });
    }
    if carousel.speed_px_per_s == 0.0 {
        warnings.push("carousel speed is 0; auto-advance is disabled");
    }
    if carousel.drag_threshold_px <= 0.0 {
        warnings.push_with_hint(
            "carousel drag threshold is 0; every press will suppress the item click",
            "Use a small positive threshold such as 5px",
        );
    }
    if carousel.fling_decay.is_zero() {
        warnings.push("carousel fling decay is 0; release fling is disabled");
    }

    if config.pager.per_page == 0 {
        return Err(ConfigGuardRailError::ZeroPageSize);
    }
    if config.pager.window_size == 0 {
        return Err(ConfigGuardRailError::ZeroWindowSize);
    }
    if config.pager.window_size % 2 == 0 {
        warnings.push(format!(
            "pager window size {} is even; the current page sits right of center",
            config.pager.window_size
        ));
    }

    if config.slideshow.interval.is_zero() {
        return Err(ConfigGuardRailError::ZeroDuration {
            field: "slideshow.interval",
        });
    }
    if config.slideshow.interval < constants::slideshow::MIN_COMFORTABLE_INTERVAL
    {
        warnings.push(format!(
            "slideshow interval {} is very short",
            humantime::format_duration(config.slideshow.interval)
        ));
    }

    if config.lightbox.site_url.is_none() {
        warnings.push_with_hint(
            "no site URL configured; lightbox share links will point at the image only",
            "Set lightbox.site_url or FOLIO_SITE_URL",
        );
    }

    Ok(warnings)
}
