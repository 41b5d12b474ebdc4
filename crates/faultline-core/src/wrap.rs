use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use crate::{ArcFault, Fault, error_code, error_name};

/// A fault whose message comes from one error and whose cause from another
///
/// Lets callers override what code resolution treats as the cause without
/// changing the visible message.
#[derive(Debug, Clone)]
pub struct Wrapped {
    err: ArcFault,
    caused_by: Option<ArcFault>,
}

/// Wrap `err`, recording `caused_by` as its cause
///
/// Without an explicit cause, the wrapper reports `err`'s own cause.
pub fn wrap(err: ArcFault, caused_by: Option<ArcFault>) -> Wrapped {
    Wrapped { err, caused_by }
}

impl Wrapped {
    /// The fault providing the display message
    pub fn inner(&self) -> &dyn Fault {
        &*self.err
    }
}

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.err, f)
    }
}

impl Error for Wrapped {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.caused_by().map(|cause| cause as &(dyn Error + 'static))
    }
}

impl Fault for Wrapped {
    fn code(&self) -> Option<u16> {
        let code = error_code(&*self.err);
        if code != 0 {
            return Some(code);
        }
        self.caused_by.as_deref().map(error_code).filter(|&code| code != 0)
    }

    fn name(&self) -> Option<Cow<'_, str>> {
        let (name, _) = error_name(&*self.err);
        (!name.is_empty()).then_some(Cow::Owned(name))
    }

    fn desc(&self) -> Option<Cow<'_, str>> {
        let (_, description) = error_name(&*self.err);
        (!description.is_empty()).then_some(Cow::Owned(description))
    }

    fn caused_by(&self) -> Option<&dyn Fault> {
        self.caused_by.as_deref().or_else(|| self.err.caused_by())
    }
}
