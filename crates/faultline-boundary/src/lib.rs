#![allow(clippy::must_use_candidate)]

use faultline_config::{DisclosureConfig, ResidueLevel};
use faultline_core::{Fault, RichError, Sanitized, chain, internal, safe};
use serde_json::Value;

/// Caller-facing disclosure boundary
///
/// Turns internal faults into the rich chain that may be sent to an
/// external caller. Whatever `safe` withholds is logged here and dropped,
/// it never reaches the returned value.
#[derive(Debug, Clone, Default)]
pub struct Boundary {
    config: DisclosureConfig,
}

impl Boundary {
    /// Create a boundary from configuration
    pub const fn new(config: DisclosureConfig) -> Self {
        Self { config }
    }

    /// Disclosure configuration in effect
    pub const fn config(&self) -> &DisclosureConfig {
        &self.config
    }

    /// Rich chain that may be shown to the caller
    ///
    /// Returns the internal server error base when nothing is disclosable
    /// and `fallback_internal` is set, `None` otherwise.
    pub fn disclose(&self, err: &dyn Fault) -> Option<RichError> {
        let Sanitized { disclosed, residue } = safe(Some(err));

        if let Some(residue) = residue {
            self.log_residue(residue, disclosed.as_ref());
        }

        match disclosed {
            Some(chain) => Some(truncate(chain, self.config.max_disclosed_depth)),
            None if self.config.fallback_internal => Some(internal().clone()),
            None => None,
        }
    }

    /// Disclosed chain as JSON, `null` when nothing is disclosable
    ///
    /// # Errors
    ///
    /// Returns an error if the data payload cannot be serialized
    pub fn to_json(&self, err: &dyn Fault) -> serde_json::Result<Value> {
        self.disclose(err).map_or(Ok(Value::Null), serde_json::to_value)
    }

    fn log_residue(&self, residue: &dyn Fault, disclosed: Option<&RichError>) {
        let detail = chain(residue).map(|link| link.to_string()).collect::<Vec<_>>().join(": ");
        let disclosed_code = disclosed.map_or(0, |head| head.code);

        match self.config.residue_level {
            ResidueLevel::Trace => {
                tracing::trace!(residue = %detail, disclosed_code, "withholding undisclosable fault");
            }
            ResidueLevel::Debug => {
                tracing::debug!(residue = %detail, disclosed_code, "withholding undisclosable fault");
            }
            ResidueLevel::Info => {
                tracing::info!(residue = %detail, disclosed_code, "withholding undisclosable fault");
            }
            ResidueLevel::Warn => {
                tracing::warn!(residue = %detail, disclosed_code, "withholding undisclosable fault");
            }
            ResidueLevel::Error => {
                tracing::error!(residue = %detail, disclosed_code, "withholding undisclosable fault");
            }
        }
    }
}

/// Keep at most `depth` links of a disclosed chain
fn truncate(link: RichError, depth: usize) -> RichError {
    let caused_by = if depth > 1 {
        link.caused_by.map(|cause| Box::new(truncate(*cause, depth - 1)))
    } else {
        if link.caused_by.is_some() {
            tracing::debug!(code = link.code, "truncating disclosed fault chain");
        }
        None
    };

    RichError { caused_by, ..link }
}
