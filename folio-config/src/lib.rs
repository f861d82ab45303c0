//! Shared configuration library for folio.
//!
//! This crate centralizes config defaults, file/env loading and validation
//! rules for the page components. The `folio` binary and the component
//! constructors both read from [`Config`] so there is a single source of truth
//! for tuning values like carousel spacing or pager page size.
#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod sources;
pub mod util;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError,
};
pub use models::{
    CarouselSettings, Config, ConfigMetadata, LightboxSettings,
    PagerSettings, SlideshowSettings,
};
pub use sources::{EnvConfig, FileConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
