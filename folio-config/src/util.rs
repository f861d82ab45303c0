use std::str::FromStr;
use std::time::Duration;

use crate::loader::error::ConfigLoadError;

/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub(crate) fn parse_env_value<T: FromStr>(
    key: &'static str,
    raw: Option<&str>,
) -> Result<Option<T>, ConfigLoadError> {
    raw.map(|value| {
        value.parse::<T>().map_err(|_| ConfigLoadError::InvalidValue {
            key,
            value: value.to_string(),
        })
    })
    .transpose()
}

pub(crate) fn parse_env_bool(
    key: &'static str,
    raw: Option<&str>,
) -> Result<Option<bool>, ConfigLoadError> {
    raw.map(|value| {
        parse_bool(value).ok_or_else(|| ConfigLoadError::InvalidValue {
            key,
            value: value.to_string(),
        })
    })
    .transpose()
}

/// Parse a humantime duration (`"5s"`, `"350ms"`), naming the field on error.
pub(crate) fn parse_duration(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<Duration>, ConfigLoadError> {
    raw.map(|value| {
        humantime::parse_duration(value).map_err(|source| {
            ConfigLoadError::InvalidDuration {
                field,
                value: value.to_string(),
                source,
            }
        })
    })
    .transpose()
}
