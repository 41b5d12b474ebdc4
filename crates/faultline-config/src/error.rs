use std::path::PathBuf;

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// An environment override held a value that does not parse
    #[error("invalid value `{value}` for {var}: {reason}")]
    Env {
        /// Variable that was read
        var: &'static str,
        /// Raw value, trimmed
        value: String,
        /// Parser message
        reason: String,
    },

    /// TOML did not match the configuration schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parsed but are inconsistent
    #[error("invalid config: {0}")]
    Invalid(String),
}
