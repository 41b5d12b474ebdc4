use std::fmt::Display;
use std::str::FromStr;

use crate::{Config, ConfigError};

/// Overrides `disclosure.residue_level`
pub const RESIDUE_LEVEL: &str = "FAULTLINE_RESIDUE_LEVEL";
/// Overrides `disclosure.fallback_internal`
pub const FALLBACK_INTERNAL: &str = "FAULTLINE_FALLBACK_INTERNAL";
/// Overrides `disclosure.max_disclosed_depth`
pub const MAX_DISCLOSED_DEPTH: &str = "FAULTLINE_MAX_DISCLOSED_DEPTH";
/// Overrides `log.filter`
pub const LOG_FILTER: &str = "FAULTLINE_LOG";
/// Overrides `log.format`
pub const LOG_FORMAT: &str = "FAULTLINE_LOG_FORMAT";

/// Every variable read by [`Config::apply_env_overrides`]
pub const OVERRIDES: [&str; 5] = [RESIDUE_LEVEL, FALLBACK_INTERNAL, MAX_DISCLOSED_DEPTH, LOG_FILTER, LOG_FORMAT];

impl Config {
    /// Apply `FAULTLINE_*` environment overrides on top of the current values
    ///
    /// Unset or blank variables leave the field untouched.
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable if a set value does not parse
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(level) = parsed(RESIDUE_LEVEL)? {
            self.disclosure.residue_level = level;
        }
        if let Some(fallback) = parsed(FALLBACK_INTERNAL)? {
            self.disclosure.fallback_internal = fallback;
        }
        if let Some(depth) = parsed(MAX_DISCLOSED_DEPTH)? {
            self.disclosure.max_disclosed_depth = depth;
        }
        if let Some(filter) = var(LOG_FILTER) {
            self.log.filter = filter;
        }
        if let Some(format) = parsed(LOG_FORMAT)? {
            self.log.format = format;
        }

        Ok(())
    }
}

fn var(name: &str) -> Option<String> {
    let raw = std::env::var(name).ok()?;
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn parsed<T>(name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    var(name)
        .map(|value| {
            value.parse().map_err(|e: T::Err| ConfigError::Env {
                var: name,
                reason: e.to_string(),
                value,
            })
        })
        .transpose()
}
