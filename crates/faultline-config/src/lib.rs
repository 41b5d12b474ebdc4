#![allow(clippy::must_use_candidate)]

pub mod disclosure;
pub mod env;
mod error;
mod loader;
pub mod log;

use serde::Deserialize;

pub use disclosure::*;
pub use error::ConfigError;
pub use log::*;

/// Top-level faultline configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Disclosure boundary configuration
    #[serde(default)]
    pub disclosure: DisclosureConfig,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}
