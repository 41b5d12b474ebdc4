use crate::fault::{data_of, inspect, link_of};
use crate::{Fault, MAX_CHAIN_DEPTH, RichError};

/// Result of [`safe`]: what may be disclosed and what must be withheld
#[derive(Debug, Default)]
pub struct Sanitized<'a> {
    /// Rich chain of the outermost links that each declare a code
    pub disclosed: Option<RichError>,
    /// First link without a code, in its original form
    ///
    /// For internal logging only, never serialize it to a caller.
    pub residue: Option<&'a dyn Fault>,
}

impl<'a> Sanitized<'a> {
    /// Whether the whole chain was disclosable
    pub const fn is_clean(&self) -> bool {
        self.residue.is_none()
    }

    /// Split into `(disclosed, residue)`
    pub fn into_parts(self) -> (Option<RichError>, Option<&'a dyn Fault>) {
        (self.disclosed, self.residue)
    }
}

/// Split a fault chain at the first link that does not declare a code
///
/// Links up to that point become a rich chain safe to hand to an external
/// caller. The first uncoded link is returned untouched as residue, and
/// nothing below it is disclosed. Whether a link is disclosable depends on
/// its own code only, never on codes further down the chain.
pub fn safe(err: Option<&dyn Fault>) -> Sanitized<'_> {
    err.map_or_else(Sanitized::default, |err| safe_at(err, 0))
}

fn safe_at(err: &dyn Fault, depth: usize) -> Sanitized<'_> {
    if depth >= MAX_CHAIN_DEPTH {
        tracing::warn!(max_depth = MAX_CHAIN_DEPTH, "fault chain too deep, withholding remainder");
        return withheld(err);
    }

    let (code, name, desc) = inspect(err);
    if code == 0 {
        return withheld(err);
    }

    let inner = err
        .caused_by()
        .map_or_else(Sanitized::default, |cause| safe_at(cause, depth + 1));

    Sanitized {
        disclosed: Some(RichError {
            name,
            code,
            desc,
            link: link_of(err),
            data: data_of(err),
            caused_by: inner.disclosed.map(Box::new),
        }),
        residue: inner.residue,
    }
}

fn withheld(err: &dyn Fault) -> Sanitized<'_> {
    Sanitized {
        disclosed: None,
        residue: Some(err),
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use serde_json::{Value, json};

    use super::*;
    use crate::{Message, new_code};

    /// Fault with an optional code, a link and an owned cause of any kind
    #[derive(Debug, thiserror::Error)]
    #[error("{message}")]
    struct Layer {
        message: &'static str,
        code: Option<u16>,
        cause: Option<Box<dyn Fault>>,
    }

    impl Layer {
        fn new(message: &'static str, code: Option<u16>, cause: Option<Box<dyn Fault>>) -> Self {
            Self { message, code, cause }
        }
    }

    impl Fault for Layer {
        fn code(&self) -> Option<u16> {
            self.code
        }

        fn link(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed("https://docs.example.com/layers"))
        }

        fn caused_by(&self) -> Option<&dyn Fault> {
            self.cause.as_deref()
        }
    }

    /// Coded foreign fault whose cause is itself
    #[derive(Debug, thiserror::Error)]
    #[error("loop detected")]
    struct Loop;

    impl Fault for Loop {
        fn code(&self) -> Option<u16> {
            Some(508)
        }

        fn caused_by(&self) -> Option<&dyn Fault> {
            Some(self)
        }
    }

    fn codes(chain: &RichError) -> Vec<u16> {
        chain.iter().map(|link| link.code).collect()
    }

    #[test]
    fn none_yields_nothing() {
        let sanitized = safe(None);
        assert!(sanitized.disclosed.is_none());
        assert!(sanitized.is_clean());
    }

    #[test]
    fn uncoded_fault_is_withheld_whole() {
        let err = Layer::new("db password rejected", None, Some(Box::new(new_code(401, "denied"))));
        let (disclosed, residue) = safe(Some(&err)).into_parts();

        assert!(disclosed.is_none());
        assert!(residue.is_some_and(|residue| std::ptr::addr_eq(residue, &err)));
    }

    #[test]
    fn coded_chain_is_disclosed_whole() {
        let err = Layer::new(
            "checkout failed",
            Some(409),
            Some(Box::new(new_code(503, "inventory unavailable").with_data(json!({"sku": "A1"})))),
        );
        let sanitized = safe(Some(&err));
        let disclosed = sanitized.disclosed.unwrap();

        assert!(sanitized.residue.is_none());
        assert_eq!(codes(&disclosed), [409, 503]);
        assert_eq!(disclosed.name, "Conflict");
        assert_eq!(disclosed.desc, "checkout failed");
        assert_eq!(disclosed.link, "https://docs.example.com/layers");

        let cause = disclosed.caused_by.as_deref().unwrap();
        assert_eq!(cause.name, "Service Unavailable");
        assert_eq!(cause.desc, "inventory unavailable");
        assert_eq!(cause.data, Some(json!({"sku": "A1"})));
    }

    #[test]
    fn disclosure_stops_at_first_uncoded_link() {
        let root = Layer::new("socket closed", None, None);
        let uncoded = Layer::new("query failed", None, Some(Box::new(root)));
        let err = Layer::new("user lookup failed", Some(404), Some(Box::new(uncoded)));

        let sanitized = safe(Some(&err));
        let disclosed = sanitized.disclosed.unwrap();
        assert_eq!(disclosed.code, 404);
        assert_eq!(disclosed.name, "Not Found");
        assert!(disclosed.caused_by.is_none());

        let residue = sanitized.residue.unwrap();
        assert_eq!(residue.to_string(), "query failed");
        assert!(std::ptr::addr_eq(residue, err.caused_by().unwrap()));
    }

    #[test]
    fn codes_below_residue_are_not_disclosed() {
        let deep = new_code(500, "secret internals");
        let uncoded = Layer::new("middle", None, Some(Box::new(deep)));
        let err = Layer::new("outer", Some(400), Some(Box::new(uncoded)));

        let disclosed = safe(Some(&err)).disclosed.unwrap();
        assert_eq!(codes(&disclosed), [400]);
    }

    #[test]
    fn rich_chain_with_uncoded_link_is_truncated() {
        let err = new_code(403, "forbidden")
            .with_cause(RichError::new("Leak", 0, "table users", "", None, None).with_cause(new_code(500, "x")));

        let sanitized = safe(Some(&err));
        let disclosed = sanitized.disclosed.unwrap();
        assert_eq!(codes(&disclosed), [403]);
        assert_eq!(sanitized.residue.map(|r| r.to_string()).as_deref(), Some("0 Leak table users (500 x)"));
    }

    #[test]
    fn disclosed_links_never_have_zero_code() {
        let chains: Vec<Box<dyn Fault>> = vec![
            Box::new(Message::new("plain")),
            Box::new(new_code(400, "a").with_cause(new_code(401, "b"))),
            Box::new(new_code(400, "a").with_cause(RichError::default())),
            Box::new(Layer::new("x", Some(418), Some(Box::new(Message::new("y"))))),
        ];

        for chain in &chains {
            if let Some(disclosed) = safe(Some(&**chain)).disclosed {
                assert!(disclosed.iter().all(|link| link.code != 0));
            }
        }
    }

    #[test]
    fn data_is_carried_through() {
        let err = new_code(422, "bad field").with_data(Value::String("email".into()));
        let disclosed = safe(Some(&err)).disclosed.unwrap();
        assert_eq!(disclosed.data, Some(json!("email")));
    }

    #[test]
    fn self_referencing_chain_is_withheld_at_bound() {
        let sanitized = safe(Some(&Loop));
        let disclosed = sanitized.disclosed.unwrap();

        assert_eq!(disclosed.iter().count(), MAX_CHAIN_DEPTH);
        assert!(disclosed.iter().all(|link| link.code == 508));
        assert!(sanitized.residue.is_some_and(|residue| residue.is::<Loop>()));
    }
}
