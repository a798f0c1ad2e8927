//! I define the session model carrying the principals of a
//! request.
//!

use ldp_vocab::trellis;
use oxrdf::NamedNode;

/// A session carries the effective agent of a request, and
/// optionally the principal on whose behalf the agent is acting.
/// Sessions live for the duration of one http request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The principal making the request.
    agent: NamedNode,

    /// The principal on whose behalf the agent is acting, if any.
    delegated_by: Option<NamedNode>,
}

impl Session {
    /// Create a new session for given agent.
    #[inline]
    pub fn new(agent: NamedNode) -> Self {
        Self {
            agent,
            delegated_by: None,
        }
    }

    /// Create a new session for given agent acting on behalf of
    /// given delegator.
    #[inline]
    pub fn new_delegated(agent: NamedNode, delegated_by: NamedNode) -> Self {
        Self {
            agent,
            delegated_by: Some(delegated_by),
        }
    }

    /// Create a new session for the well-known anonymous agent.
    #[inline]
    pub fn anonymous() -> Self {
        Self::new(trellis::ANONYMOUS_AGENT.into_owned())
    }

    /// Get the agent of this session.
    #[inline]
    pub fn agent(&self) -> &NamedNode {
        &self.agent
    }

    /// Get the delegator of this session, if any.
    #[inline]
    pub fn delegated_by(&self) -> Option<&NamedNode> {
        self.delegated_by.as_ref()
    }

    /// Check if this session's agent is the well-known anonymous
    /// agent.
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.agent.as_ref() == trellis::ANONYMOUS_AGENT
    }

    /// Check if this session's agent is the well-known
    /// administrator agent.
    #[inline]
    pub fn is_administrator(&self) -> bool {
        self.agent.as_ref() == trellis::ADMINISTRATOR_AGENT
    }
}
