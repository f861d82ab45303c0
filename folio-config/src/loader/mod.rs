pub mod error;

use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
};
use url::Url;

use self::error::ConfigLoadError;
use crate::{
    constants::DEFAULT_CONFIG_FILES,
    models::{
        CarouselSettings, Config, ConfigMetadata, LightboxSettings,
        PagerSettings, SlideshowSettings,
    },
    sources::{EnvConfig, FileConfig},
    util::{parse_duration, parse_env_bool, parse_env_value},
    validation::{self, ConfigWarnings},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> =
    Lazy::new(|| DEFAULT_CONFIG_FILES.iter().map(PathBuf::from).collect());

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Use these values instead of reading the process environment. When set,
    /// no `.env` file is loaded either.
    pub env: Option<EnvConfig>,
}

/// Result of a successful load: the resolved config plus soft warnings.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.options.env = Some(env);
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (env_config, env_file_loaded) = match &self.options.env {
            Some(env) => (env.clone(), false),
            None => {
                let loaded = self.load_env_file()?;
                (EnvConfig::gather(), loaded)
            }
        };

        let (file_config, config_path) = self.load_file_config(&env_config)?;
        let config_present = config_path.is_some();

        let mut warnings = ConfigWarnings::default();
        if !config_present {
            warnings.push_with_hint(
                "No folio.toml detected; using defaults and environment variables",
                "Create folio.toml or point FOLIO_CONFIG_PATH at a config file",
            );
        }

        let mut config =
            compose_config(file_config.unwrap_or_default(), &env_config)?;
        config.metadata = ConfigMetadata {
            config_path,
            env_file_loaded,
        };

        warnings.extend(validation::apply_guard_rails(&config)?);
        for warning in warnings.iter() {
            tracing::warn!(hint = ?warning.hint, "{}", warning.message);
        }
        tracing::debug!(
            path = ?config.metadata.config_path,
            env_file = config.metadata.env_file_loaded,
            "configuration loaded"
        );

        Ok(ConfigLoad { config, warnings })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        let result = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true),
            None => dotenvy::dotenv().map(|_| true),
        };
        result.or_else(|err| match err {
            dotenvy::Error::Io(_) => Ok(false),
            _ => Err(err.into()),
        })
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env_config.config_path.clone());

        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigLoadError::MissingConfig { path });
                }
                path
            }
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(found) => found.clone(),
                None => return Ok((None, None)),
            },
        };

        let file_config = read_file_config(&path)?;
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&contents).map_err(|source| {
            ConfigLoadError::ParseJson {
                path: path.to_path_buf(),
                source,
            }
        })
    } else {
        toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Merge file values and environment overrides over the compiled defaults.
/// Environment values win over file values.
fn compose_config(
    file: FileConfig,
    env: &EnvConfig,
) -> Result<Config, ConfigLoadError> {
    let FileConfig {
        carousel: file_carousel,
        pager: file_pager,
        slideshow: file_slideshow,
        lightbox: file_lightbox,
    } = file;

    let defaults = CarouselSettings::default();
    let carousel = CarouselSettings {
        spacing_px: parse_env_value(
            EnvConfig::CAROUSEL_SPACING,
            env.carousel_spacing.as_deref(),
        )?
        .or(file_carousel.spacing_px)
        .unwrap_or(defaults.spacing_px),
        speed_px_per_s: parse_env_value(
            EnvConfig::CAROUSEL_SPEED,
            env.carousel_speed.as_deref(),
        )?
        .or(file_carousel.speed_px_per_s)
        .unwrap_or(defaults.speed_px_per_s),
        drag_threshold_px: parse_env_value(
            EnvConfig::CAROUSEL_DRAG_THRESHOLD,
            env.carousel_drag_threshold.as_deref(),
        )?
        .or(file_carousel.drag_threshold_px)
        .unwrap_or(defaults.drag_threshold_px),
        fling_decay: parse_duration(
            "carousel.fling_decay",
            env.carousel_fling_decay
                .as_deref()
                .or(file_carousel.fling_decay.as_deref()),
        )?
        .unwrap_or(defaults.fling_decay),
        fling_sample_window: parse_duration(
            "carousel.fling_sample_window",
            file_carousel.fling_sample_window.as_deref(),
        )?
        .unwrap_or(defaults.fling_sample_window),
        frame_interval: parse_duration(
            "carousel.frame_interval",
            env.carousel_frame_interval
                .as_deref()
                .or(file_carousel.frame_interval.as_deref()),
        )?
        .unwrap_or(defaults.frame_interval),
    };

    let defaults = PagerSettings::default();
    let pager = PagerSettings {
        per_page: parse_env_value(
            EnvConfig::PAGER_PER_PAGE,
            env.pager_per_page.as_deref(),
        )?
        .or(file_pager.per_page)
        .unwrap_or(defaults.per_page),
        window_size: parse_env_value(
            EnvConfig::PAGER_WINDOW,
            env.pager_window.as_deref(),
        )?
        .or(file_pager.window_size)
        .unwrap_or(defaults.window_size),
    };

    let defaults = SlideshowSettings::default();
    let slideshow = SlideshowSettings {
        interval: parse_duration(
            "slideshow.interval",
            env.slideshow_interval
                .as_deref()
                .or(file_slideshow.interval.as_deref()),
        )?
        .unwrap_or(defaults.interval),
        autoplay: parse_env_bool(
            EnvConfig::SLIDESHOW_AUTOPLAY,
            env.slideshow_autoplay.as_deref(),
        )?
        .or(file_slideshow.autoplay)
        .unwrap_or(defaults.autoplay),
    };

    let site_url = env
        .site_url
        .clone()
        .or(file_lightbox.site_url)
        .map(|raw| {
            Url::parse(&raw).map_err(|source| ConfigLoadError::InvalidSiteUrl {
                value: raw.clone(),
                source,
            })
        })
        .transpose()?;
    let lightbox = LightboxSettings {
        site_url,
        share_text: env
            .share_text
            .clone()
            .or(file_lightbox.share_text)
            .unwrap_or_else(|| LightboxSettings::default().share_text),
    };

    Ok(Config {
        carousel,
        pager,
        slideshow,
        lightbox,
        metadata: ConfigMetadata::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn empty_sources_fall_back_to_defaults() {
        let config =
            compose_config(FileConfig::default(), &EnvConfig::default())
                .expect("defaults compose");
        assert_eq!(config.carousel, CarouselSettings::default());
        assert_eq!(config.pager, PagerSettings::default());
        assert_eq!(config.slideshow, SlideshowSettings::default());
        assert!(config.lightbox.site_url.is_none());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut file = FileConfig::default();
        file.pager.per_page = Some(8);
        file.slideshow.interval = Some("3s".into());
        let env = EnvConfig::from_vars([
            ("FOLIO_PAGER_PER_PAGE", "12"),
            ("FOLIO_SLIDESHOW_AUTOPLAY", "off"),
        ]);

        let config = compose_config(file, &env).expect("compose");
        assert_eq!(config.pager.per_page, 12);
        assert_eq!(config.slideshow.interval, Duration::from_secs(3));
        assert!(!config.slideshow.autoplay);
    }

    #[test]
    fn malformed_site_url_is_an_error() {
        let env = EnvConfig::from_vars([("FOLIO_SITE_URL", "not a url")]);
        let err = compose_config(FileConfig::default(), &env).unwrap_err();
        assert!(matches!(err, ConfigLoadError::InvalidSiteUrl { .. }));
    }
}
