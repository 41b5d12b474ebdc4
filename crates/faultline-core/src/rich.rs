use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fault::{data_of, link_of, non_empty};
use crate::{Fault, MAX_CHAIN_DEPTH, error_code, error_name, status};

/// Self-contained, serializable error with explicit metadata
///
/// The cause chain is owned and homogeneous: every `caused_by` is itself a
/// `RichError`, never a raw error value. Values are not mutated once built;
/// share them by reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichError {
    /// Short canonical label
    #[serde(default)]
    pub name: String,
    /// Integer classification, `0` means unset
    #[serde(default, skip_serializing_if = "is_unset")]
    pub code: u16,
    /// Human-readable detail
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub desc: String,
    /// Reference URI for remediation or docs
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link: String,
    /// Arbitrary structured payload
    #[serde(default, skip_serializing_if = "is_absent")]
    pub data: Option<Value>,
    /// Underlying cause
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caused_by: Option<Box<RichError>>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_unset(code: &u16) -> bool {
    *code == 0
}

#[allow(clippy::ref_option)]
fn is_absent(data: &Option<Value>) -> bool {
    matches!(data, None | Some(Value::Null))
}

impl RichError {
    /// Build a rich error from every field
    pub fn new(
        name: impl Into<String>,
        code: u16,
        desc: impl Into<String>,
        link: impl Into<String>,
        data: Option<Value>,
        caused_by: Option<Self>,
    ) -> Self {
        Self {
            name: name.into(),
            code,
            desc: desc.into(),
            link: link.into(),
            data,
            caused_by: caused_by.map(Box::new),
        }
    }

    /// Set the name
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// Set the link
    #[must_use]
    pub fn with_link(self, link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            ..self
        }
    }

    /// Set the data payload
    #[must_use]
    pub fn with_data(self, data: Value) -> Self {
        Self {
            data: Some(data),
            ..self
        }
    }

    /// Set the cause
    #[must_use]
    pub fn with_cause(self, cause: Self) -> Self {
        Self {
            caused_by: Some(Box::new(cause)),
            ..self
        }
    }

    /// Iterate over this error and its rich causes, outermost first
    pub fn iter(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |link| link.caused_by.as_deref())
    }
}

/// Rich error with a code and description and no name
pub fn new_code(code: u16, desc: impl Into<String>) -> RichError {
    RichError {
        code,
        desc: desc.into(),
        ..RichError::default()
    }
}

impl fmt::Display for RichError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;
        if !self.name.is_empty() {
            write!(f, " {}", self.name)?;
        }
        if !self.desc.is_empty() {
            write!(f, " {}", self.desc)?;
        }
        if let Some(cause) = &self.caused_by {
            write!(f, " ({cause})")?;
        }
        Ok(())
    }
}

impl Error for RichError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.caused_by.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

impl Fault for RichError {
    fn code(&self) -> Option<u16> {
        (self.code != 0).then_some(self.code)
    }

    fn name(&self) -> Option<Cow<'_, str>> {
        non_empty(&self.name)
    }

    fn desc(&self) -> Option<Cow<'_, str>> {
        non_empty(&self.desc)
    }

    fn link(&self) -> Option<Cow<'_, str>> {
        non_empty(&self.link)
    }

    fn data(&self) -> Option<&Value> {
        self.data.as_ref().filter(|data| !data.is_null())
    }

    fn caused_by(&self) -> Option<&dyn Fault> {
        self.caused_by.as_deref().map(|cause| cause as &dyn Fault)
    }
}

/// Convert a whole fault chain into a rich error chain
///
/// Rich errors are returned unchanged. Every other link gets its code from
/// [`error_code`] and its name and description from [`error_name`], so an
/// uncoded link over a coded cause reports the cause's code. Unresolved
/// fields are left empty and each cause is converted in turn.
pub fn rich(err: Option<&dyn Fault>) -> Option<RichError> {
    err.map(|err| rich_at(err, 0))
}

fn rich_at(err: &dyn Fault, depth: usize) -> RichError {
    if let Some(rich) = err.downcast_ref::<RichError>() {
        return rich.clone();
    }

    let code = error_code(err);
    let (name, desc) = error_name(err);

    let caused_by = match err.caused_by() {
        Some(_) if depth + 1 >= MAX_CHAIN_DEPTH => {
            tracing::warn!(max_depth = MAX_CHAIN_DEPTH, "fault chain too deep, dropping remaining causes");
            None
        }
        Some(cause) => Some(Box::new(rich_at(cause, depth + 1))),
        None => None,
    };

    RichError {
        name,
        code,
        desc,
        link: link_of(err),
        data: data_of(err),
        caused_by,
    }
}

fn sentinel(cell: &'static OnceLock<RichError>, code: u16, desc: &str) -> &'static RichError {
    cell.get_or_init(|| new_code(code, desc).with_name(status::name_for_code(code)))
}

/// Base error for `400 Bad Request`
pub fn bad_method() -> &'static RichError {
    static ERR: OnceLock<RichError> = OnceLock::new();
    sentinel(&ERR, 400, "bad request method")
}

/// Base error for `401 Unauthorized`
pub fn unauthorized() -> &'static RichError {
    static ERR: OnceLock<RichError> = OnceLock::new();
    sentinel(&ERR, 401, "unauthorized")
}

/// Base error for `404 Not Found`
pub fn not_found() -> &'static RichError {
    static ERR: OnceLock<RichError> = OnceLock::new();
    sentinel(&ERR, 404, "not found")
}

/// Base error for `500 Internal Server Error`
pub fn internal() -> &'static RichError {
    static ERR: OnceLock<RichError> = OnceLock::new();
    sentinel(&ERR, 500, "internal server error")
}
