//! I define the interface and implementations of authorization
//! caches, which memoize resolved access mode sets.
//!

use std::{fmt::Debug, time::Duration};

use dyn_problem::ProbFuture;
use oxrdf::NamedNode;
use trellis_space::resource::uri::ResourceUri;

use crate::model::{session::Session, AccessModeSet};

pub mod impl_;

/// Key of authorization cache entries. Decisions are memoized
/// per target, agent, and delegator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorizationCacheKey {
    /// Target resource uri.
    pub target: ResourceUri,

    /// Agent of the session.
    pub agent: NamedNode,

    /// Delegator of the session, if any.
    pub delegator: Option<NamedNode>,
}

impl AuthorizationCacheKey {
    /// Create a new [`AuthorizationCacheKey`] for given target
    /// and session.
    pub fn new(target: &ResourceUri, session: &Session) -> Self {
        Self {
            target: target.clone(),
            agent: session.agent().clone(),
            delegator: session.delegated_by().cloned(),
        }
    }
}

/// Cache bounds configuration.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache holds.
    pub max_capacity: u64,

    /// Time for which an entry stays fresh.
    pub time_to_live: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 1000,
            time_to_live: Duration::from_secs(10),
        }
    }
}

/// A trait for authorization caches. A cache resolves the value
/// for a key either from a fresh entry, or by driving the given
/// computation, with single-flight semantics: concurrent callers
/// for the same missing key share one underlying computation.
pub trait AuthorizationCache: Debug + Send + Sync + 'static {
    /// Resolve the mode set for given key, computing it through
    /// given future on a miss.
    fn resolve(
        &self,
        key: AuthorizationCacheKey,
        compute: ProbFuture<'static, AccessModeSet>,
    ) -> ProbFuture<'static, AccessModeSet>;
}
