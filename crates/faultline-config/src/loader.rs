use std::path::Path;

use crate::{Config, ConfigError};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads and deserializes the file, applies `FAULTLINE_*` environment
    /// overrides, then validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails, an
    /// override does not parse, or validation fails
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Self = toml::from_str(&raw)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text alone
    ///
    /// Environment overrides are not applied.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the disclosed depth is zero or the log filter
    /// is blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.disclosure.max_disclosed_depth == 0 {
            return Err(ConfigError::Invalid(
                "disclosure.max_disclosed_depth must be at least 1".to_owned(),
            ));
        }

        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log.filter must not be empty".to_owned()));
        }

        Ok(())
    }
}
