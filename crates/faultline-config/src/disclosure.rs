use std::str::FromStr;

use serde::Deserialize;

/// Disclosure boundary configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisclosureConfig {
    /// Level at which withheld residue is logged
    #[serde(default)]
    pub residue_level: ResidueLevel,
    /// Return the internal server error base when nothing is disclosable
    #[serde(default = "default_fallback_internal")]
    pub fallback_internal: bool,
    /// Maximum number of links in a disclosed chain
    #[serde(default = "default_max_disclosed_depth")]
    pub max_disclosed_depth: usize,
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            residue_level: ResidueLevel::default(),
            fallback_internal: default_fallback_internal(),
            max_disclosed_depth: default_max_disclosed_depth(),
        }
    }
}

const fn default_fallback_internal() -> bool {
    true
}

const fn default_max_disclosed_depth() -> usize {
    16
}

/// Log level for withheld residue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResidueLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for ResidueLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Trace, Self::Debug, Self::Info, Self::Warn, Self::Error]
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown residue level `{s}`"))
    }
}

impl ResidueLevel {
    /// Lowercase name as written in configuration
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}
