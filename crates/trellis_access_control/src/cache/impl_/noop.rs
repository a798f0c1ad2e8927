//! I define a no-op implementation of
//! [`AuthorizationCache`](crate::cache::AuthorizationCache).
//!

use dyn_problem::ProbFuture;

use super::super::{AuthorizationCache, AuthorizationCacheKey};
use crate::model::AccessModeSet;

/// An [`AuthorizationCache`] that delegates straight to the
/// underlying computation. Selected when caching is disabled.
#[derive(Debug, Clone, Default)]
pub struct NoopAuthorizationCache;

impl AuthorizationCache for NoopAuthorizationCache {
    #[inline]
    fn resolve(
        &self,
        _key: AuthorizationCacheKey,
        compute: ProbFuture<'static, AccessModeSet>,
    ) -> ProbFuture<'static, AccessModeSet> {
        compute
    }
}
