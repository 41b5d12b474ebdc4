//! Error metadata and disclosure boundary
//!
//! Errors opt into machine-usable metadata (code, name, description, link,
//! data) through the [`Fault`] trait. [`rich`] turns any fault chain into a
//! serializable [`RichError`] chain, and [`safe`] splits a chain into the
//! part that may be shown to an external caller and the residue that must
//! stay internal.

#![allow(clippy::must_use_candidate)]

mod chain;
mod fault;
mod message;
mod multi;
mod rich;
mod safe;
mod status;
mod wrap;

pub use chain::{Chain, MAX_CHAIN_DEPTH, chain, error_code, error_name, stack, unwrap};
pub use fault::{ArcFault, Fault, code_of, data_of, description_of, inspect, link_of, name_of};
pub use message::{Message, Opaque};
pub use multi::{Multi, join, join_new};
pub use rich::{RichError, bad_method, internal, new_code, not_found, rich, unauthorized};
pub use safe::{Sanitized, safe};
pub use status::{UNKNOWN, status_text};
pub use wrap::{Wrapped, wrap};
