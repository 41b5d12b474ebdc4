//! Logging setup for faultline consumers
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a
//! plain or JSON `fmt` layer

use faultline_config::{LogConfig, LogFormat};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;

/// Errors raised while installing the global subscriber
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// A global subscriber is already installed
    #[error("failed to install log subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Initialize logging from configuration
///
/// Invalid filter directives fall back to `info` with a warning once the
/// subscriber is installed.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set
pub fn init(config: &LogConfig) -> Result<(), TelemetryError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let (filter, rejected) = match parse_filter(&config.filter) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e)),
    };

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Plain => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);

            registry.with(fmt_layer).try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(false);

            registry.with(fmt_layer).try_init()?;
        }
    }

    if let Some(e) = rejected {
        tracing::warn!(filter = %config.filter, error = %e, "invalid log filter, using `info`");
    }

    Ok(())
}

/// Parse `EnvFilter` directives
///
/// # Errors
///
/// Returns an error if any directive is malformed
pub fn parse_filter(directives: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(directives)
}
