use std::error::Error;
use std::fmt::{self, Write as _};
use std::sync::Arc;

use crate::{ArcFault, Fault, Message};

/// Ordered aggregate of independent, co-occurring faults
///
/// Always exactly one level deep: joining or appending a `Multi` splices
/// its elements in place. A `Multi` is not a cause chain, it declares no
/// capabilities and no cause.
///
/// [`Multi::append`] is the only mutating operation in this crate. Sharing
/// one aggregate between threads while appending needs external
/// synchronization.
#[derive(Debug, Clone, Default)]
pub struct Multi(Vec<ArcFault>);

impl Multi {
    /// Create an empty aggregate
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of leaf faults
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the aggregate holds no faults
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Leaf faults in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Fault> {
        self.0.iter().map(|err| &**err)
    }

    /// Append faults, flattening any nested aggregate
    pub fn append(&mut self, errs: impl IntoIterator<Item = ArcFault>) {
        for err in errs {
            push_flat(&mut self.0, err);
        }
    }

    /// Collapse into `None`, the single element, or the aggregate itself
    pub fn reduce(mut self) -> Option<ArcFault> {
        match self.0.len() {
            0 => None,
            1 => self.0.pop(),
            _ => Some(Arc::new(self)),
        }
    }
}

impl fmt::Display for Multi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_char('\n')?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl Error for Multi {}

impl Fault for Multi {}

/// Join faults into one, dropping `None` and flattening aggregates
///
/// Returns `None` when nothing is left, the lone fault when exactly one
/// leaf remains, and a fresh [`Multi`] in input order otherwise.
pub fn join<I>(errs: I) -> Option<ArcFault>
where
    I: IntoIterator<Item = Option<ArcFault>>,
{
    let mut multi = Multi::new();
    multi.append(errs.into_iter().flatten());
    multi.reduce()
}

/// Join `err` with a new plain error displaying `message`
pub fn join_new(err: Option<ArcFault>, message: impl Into<String>) -> Option<ArcFault> {
    let fresh: ArcFault = Arc::new(Message::new(message));
    join([err, Some(fresh)])
}

fn push_flat(leaves: &mut Vec<ArcFault>, err: ArcFault) {
    if let Some(multi) = err.downcast_ref::<Multi>() {
        leaves.extend(multi.0.iter().cloned());
    } else {
        leaves.push(err);
    }
}
