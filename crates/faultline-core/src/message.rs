use std::error::Error;
use std::fmt;

use crate::Fault;

/// Plain display-only error with no metadata
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct Message(String);

impl Message {
    /// Create an error that displays as `message`
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl Fault for Message {}

/// Foreign error admitted into the fault model as a plain error
///
/// Declares no capabilities and no cause, so `safe` always withholds it.
/// The foreign `source()` chain is kept for internal logging.
#[derive(Debug)]
pub struct Opaque(Box<dyn Error + Send + Sync + 'static>);

impl Opaque {
    /// Adapt any standard error
    pub fn new<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self(Box::new(err))
    }

    /// Borrow the foreign error
    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.0
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for Opaque {
    fn from(err: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self(err)
    }
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for Opaque {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl Fault for Opaque {}
