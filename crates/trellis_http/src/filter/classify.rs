//! I define the classification of inbound requests into the
//! access modes they require.
//!

use std::collections::HashSet;

use http::{header::HeaderName, HeaderMap, Method, Request, Uri};
use tracing::warn;
use trellis_access_control::model::{AccessMode, AccessModeSet};

/// The `Prefer` header field name.
static PREFER: HeaderName = HeaderName::from_static("prefer");

/// An access mode a request must hold to proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredMode {
    /// The read mode is required.
    Read,

    /// The write mode is required.
    Write,

    /// The append mode is required. It is satisfied by either
    /// the append or the write mode.
    Append,

    /// The control mode is required.
    Control,
}

impl RequiredMode {
    /// Check if this requirement is satisfied by given granted
    /// mode set.
    pub fn is_satisfied_by(&self, granted: AccessModeSet) -> bool {
        match self {
            Self::Read => granted.contains(AccessMode::Read),
            Self::Write => granted.contains(AccessMode::Write),
            Self::Append => {
                granted.contains(AccessMode::Append) || granted.contains(AccessMode::Write)
            }
            Self::Control => granted.contains(AccessMode::Control),
        }
    }
}

/// Classifier of inbound requests into required access modes,
/// per the method tables and the acl extension marker. The
/// method tables are extendable through configuration.
#[derive(Debug, Clone)]
pub struct AccessClassifier {
    readable_methods: HashSet<Method>,
    writable_methods: HashSet<Method>,
    appendable_methods: HashSet<Method>,
}

impl Default for AccessClassifier {
    fn default() -> Self {
        Self {
            readable_methods: [Method::GET, Method::HEAD, Method::OPTIONS]
                .into_iter()
                .collect(),
            writable_methods: [Method::PUT, Method::PATCH, Method::DELETE]
                .into_iter()
                .collect(),
            appendable_methods: [Method::POST].into_iter().collect(),
        }
    }
}

impl AccessClassifier {
    /// Get a new [`AccessClassifier`] with the standard method
    /// tables extended by given method names. Invalid method
    /// names are skipped.
    pub fn new_extended(
        extra_readable: &[String],
        extra_writable: &[String],
        extra_appendable: &[String],
    ) -> Self {
        let mut classifier = Self::default();
        classifier.readable_methods.extend(parse_methods(extra_readable));
        classifier.writable_methods.extend(parse_methods(extra_writable));
        classifier
            .appendable_methods
            .extend(parse_methods(extra_appendable));
        classifier
    }

    /// Classify given request into the access modes it requires.
    /// An empty classification lets the request pass without
    /// authorization.
    pub fn classify<B>(&self, req: &Request<B>) -> Vec<RequiredMode> {
        let mut required = Vec::new();

        if has_acl_ext(req.uri()) {
            required.push(RequiredMode::Control);
        } else if self.readable_methods.contains(req.method()) {
            required.push(RequiredMode::Read);
        } else if self.writable_methods.contains(req.method()) {
            required.push(RequiredMode::Write);
        } else if self.appendable_methods.contains(req.method()) {
            required.push(RequiredMode::Append);
        }

        // Reading audit data requires control, regardless of the
        // method.
        if prefers_audit(req.headers()) && !required.contains(&RequiredMode::Control) {
            required.push(RequiredMode::Control);
        }

        required
    }
}

/// Check if given uri carries the acl extension marker.
pub fn has_acl_ext(uri: &Uri) -> bool {
    uri.query()
        .map(|query| query.split('&').any(|param| param == "ext=acl"))
        .unwrap_or(false)
}

/// Check if given headers prefer inclusion of the audit graph.
fn prefers_audit(headers: &HeaderMap) -> bool {
    headers.get_all(&PREFER).iter().any(|value| {
        value
            .to_str()
            .map(|value| value.contains(ldp_vocab::trellis::PREFER_AUDIT.as_str()))
            .unwrap_or(false)
    })
}

fn parse_methods(names: &[String]) -> impl Iterator<Item = Method> + '_ {
    names.iter().filter_map(|name| {
        Method::from_bytes(name.as_bytes())
            .inspect_err(|e| warn!("Skipping invalid configured method {}. Error: {}", name, e))
            .ok()
    })
}
