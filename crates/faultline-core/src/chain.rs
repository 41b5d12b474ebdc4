use crate::fault::{code_of, description_of, name_of};
use crate::{Fault, status};

/// Maximum number of links any chain walk visits
///
/// Chains built from this crate cannot cycle, but a foreign `caused_by()`
/// implementation could return itself.
pub const MAX_CHAIN_DEPTH: usize = 256;

/// Immediate cause of `err`, if any
pub fn unwrap(err: &dyn Fault) -> Option<&dyn Fault> {
    err.caused_by()
}

/// Iterate over `err` and its causes, outermost first
pub fn chain(err: &dyn Fault) -> Chain<'_> {
    Chain {
        next: Some(err),
        depth: 0,
    }
}

/// Iterator over a fault chain, see [`chain`]
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a dyn Fault>,
    depth: usize,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a dyn Fault;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        if self.depth >= MAX_CHAIN_DEPTH {
            tracing::warn!(max_depth = MAX_CHAIN_DEPTH, "fault chain too deep, stopping walk");
            return None;
        }

        self.depth += 1;
        self.next = current.caused_by();
        Some(current)
    }
}

/// Code of the nearest link that declares one, `0` when none does
pub fn error_code(err: &dyn Fault) -> u16 {
    chain(err).map(code_of).find(|&code| code != 0).unwrap_or(0)
}

/// Resolve the `(name, description)` pair for `err`
///
/// A fault declaring a name is returned verbatim with its declared
/// description, empty or not. Otherwise, if a code resolves anywhere along
/// the chain, the name comes from the status table (`"unknown"` for
/// unrecognized codes) and a missing description from the display message.
/// Both are empty when no link has a code.
pub fn error_name(err: &dyn Fault) -> (String, String) {
    let name = name_of(err);
    let description = description_of(err);

    if !name.is_empty() {
        return (name, description);
    }

    let code = error_code(err);
    if code == 0 {
        return (String::new(), String::new());
    }

    let description = if description.is_empty() {
        err.to_string()
    } else {
        description
    };

    (status::name_for_code(code).to_owned(), description)
}

/// Original faults of a chain, root cause first
///
/// `None` yields an empty stack.
pub fn stack(err: Option<&dyn Fault>) -> Vec<&dyn Fault> {
    let mut faults: Vec<_> = err.into_iter().flat_map(chain).collect();
    faults.reverse();
    faults
}
