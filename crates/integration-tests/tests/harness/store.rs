//! Domain error fixture modeled on a storage service

use std::borrow::Cow;

use faultline_core::{Fault, Opaque};
use serde_json::{Value, json};
use thiserror::Error;

/// Errors a storage service reports to its callers
#[derive(Debug, Error)]
pub enum StoreError {
    /// Requested record does not exist
    #[error("record not found: {key}")]
    NotFound { key: String, data: Value },

    /// Write lost a race with another writer
    #[error("write conflict on {key}")]
    Conflict {
        key: String,
        #[source]
        cause: Box<StoreError>,
    },

    /// Backend failed in a way callers must not see
    #[error("storage backend failure")]
    Backend(#[source] Opaque),
}

impl StoreError {
    pub fn not_found(key: &str) -> Self {
        Self::NotFound {
            key: key.to_owned(),
            data: json!({ "key": key }),
        }
    }

    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Opaque::new(err))
    }
}

impl Fault for StoreError {
    fn code(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Conflict { .. } => Some(409),
            Self::Backend(_) => None,
        }
    }

    fn name(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::NotFound { .. } => Some(Cow::Borrowed("not_found_error")),
            Self::Conflict { .. } => Some(Cow::Borrowed("conflict_error")),
            Self::Backend(_) => None,
        }
    }

    fn desc(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::NotFound { .. } | Self::Conflict { .. } => Some(Cow::Owned(self.to_string())),
            Self::Backend(_) => None,
        }
    }

    fn link(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Conflict { .. } => Some(Cow::Borrowed("https://docs.example.com/errors/conflict")),
            _ => None,
        }
    }

    fn data(&self) -> Option<&Value> {
        match self {
            Self::NotFound { data, .. } => Some(data),
            _ => None,
        }
    }

    fn caused_by(&self) -> Option<&dyn Fault> {
        match self {
            Self::Conflict { cause, .. } => Some(&**cause as &dyn Fault),
            Self::Backend(err) => Some(err as &dyn Fault),
            Self::NotFound { .. } => None,
        }
    }
}
