//! I define a caching wrapper over
//! [`AccessEvaluator`](crate::evaluator::AccessEvaluator)
//! implementations.
//!

use std::sync::Arc;

use dyn_problem::ProbFuture;
use trellis_space::resource::uri::ResourceUri;

use crate::{
    cache::{AuthorizationCache, AuthorizationCacheKey},
    evaluator::AccessEvaluator,
    model::{session::Session, AccessModeSet},
};

/// An [`AccessEvaluator`] that memoizes the decisions of an
/// inner evaluator in an authorization cache. Decisions are
/// keyed per target, agent, and delegator.
#[derive(Debug)]
pub struct CachingAccessEvaluator<E, C> {
    /// Inner evaluator.
    inner: Arc<E>,

    /// Authorization cache.
    cache: C,
}

impl<E, C: Clone> Clone for CachingAccessEvaluator<E, C> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            cache: self.cache.clone(),
        }
    }
}

impl<E, C> CachingAccessEvaluator<E, C> {
    /// Create a new [`CachingAccessEvaluator`] over given inner
    /// evaluator and cache.
    #[inline]
    pub fn new(inner: Arc<E>, cache: C) -> Self {
        Self { inner, cache }
    }
}

impl<E, C> AccessEvaluator for CachingAccessEvaluator<E, C>
where
    E: AccessEvaluator,
    C: AuthorizationCache,
{
    fn access_modes(
        &self,
        target: ResourceUri,
        session: Session,
    ) -> ProbFuture<'static, AccessModeSet> {
        let key = AuthorizationCacheKey::new(&target, &session);
        self.cache
            .resolve(key, self.inner.access_modes(target, session))
    }
}
