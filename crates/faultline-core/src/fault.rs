use std::borrow::Cow;
use std::error::Error;
use std::sync::Arc;

use serde_json::Value;

use crate::status;

/// Shared handle to an error value
///
/// Faults are immutable once built, so handles can be cloned and sent
/// across threads freely.
pub type ArcFault = Arc<dyn Fault>;

/// An error value that may carry machine-usable metadata and a cause
///
/// Every capability is optional. A type declares a capability by
/// overriding the matching method; the provided defaults declare nothing.
/// Resolvers treat `Some(0)` codes and empty strings as undeclared.
///
/// Any error type can take part by implementing this trait, no base type
/// is required:
///
/// ```
/// use faultline_core::{Fault, error_code};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("quota exhausted")]
/// struct QuotaExhausted;
///
/// impl Fault for QuotaExhausted {
///     fn code(&self) -> Option<u16> {
///         Some(429)
///     }
/// }
///
/// assert_eq!(error_code(&QuotaExhausted), 429);
/// ```
pub trait Fault: Error + Send + Sync + 'static {
    /// Integer classification, `0` means unset
    fn code(&self) -> Option<u16> {
        None
    }

    /// Short canonical label
    fn name(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Human-readable detail
    fn desc(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Reference URI for remediation or docs
    fn link(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Arbitrary structured payload
    fn data(&self) -> Option<&Value> {
        None
    }

    /// Immediate cause of this fault
    fn caused_by(&self) -> Option<&dyn Fault> {
        None
    }
}

impl dyn Fault {
    /// Whether this fault is a `T`
    pub fn is<T: Fault>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Borrow this fault as a `T` if that is its concrete type
    pub fn downcast_ref<T: Fault>(&self) -> Option<&T> {
        let err: &(dyn Error + 'static) = self;
        err.downcast_ref::<T>()
    }
}

/// Code declared by this fault alone, `0` when absent
pub fn code_of(err: &dyn Fault) -> u16 {
    err.code().unwrap_or(0)
}

/// Name declared by this fault alone, empty when absent
pub fn name_of(err: &dyn Fault) -> String {
    declared(err.name())
}

/// Description declared by this fault alone, empty when absent
pub fn description_of(err: &dyn Fault) -> String {
    declared(err.desc())
}

/// Link declared by this fault alone, empty when absent
pub fn link_of(err: &dyn Fault) -> String {
    declared(err.link())
}

/// Data declared by this fault alone, `null` counting as absent
pub fn data_of(err: &dyn Fault) -> Option<Value> {
    err.data().filter(|data| !data.is_null()).cloned()
}

/// Resolve `(code, name, description)` for a single link
///
/// The code is local to `err` and never taken from its causes. A missing
/// name falls back to the status text for the code (or `"unknown"`), a
/// missing description to the display message.
pub fn inspect(err: &dyn Fault) -> (u16, String, String) {
    let code = code_of(err);

    let mut name = name_of(err);
    if name.is_empty() {
        name = status::name_for_code(code).to_owned();
    }

    let mut description = description_of(err);
    if description.is_empty() {
        description = err.to_string();
    }

    (code, name, description)
}

/// Borrow a string field as a declared capability, empty meaning none
pub(crate) fn non_empty(value: &str) -> Option<Cow<'_, str>> {
    (!value.is_empty()).then_some(Cow::Borrowed(value))
}

fn declared(value: Option<Cow<'_, str>>) -> String {
    value.map(Cow::into_owned).unwrap_or_default()
}
