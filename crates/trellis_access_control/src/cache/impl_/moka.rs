//! I define a moka backed implementation of
//! [`AuthorizationCache`](crate::cache::AuthorizationCache).
//!

use dyn_problem::{define_anon_problem_types, ProbFuture};
use moka::future::{Cache, CacheBuilder};
use tracing::error;

use super::super::{AuthorizationCache, AuthorizationCacheKey, CacheConfig};
use crate::model::AccessModeSet;

define_anon_problem_types!(
    /// Shared authorization resolution failed.
    SHARED_RESOLUTION_FAILED: ("Shared authorization resolution failed.");
);

/// An [`AuthorizationCache`] over a size and ttl bounded moka
/// cache. Concurrent misses for the same key share one
/// underlying computation, and abandoned computations never
/// populate the cache.
#[derive(Debug, Clone)]
pub struct MokaAuthorizationCache {
    /// Inner cache.
    cache: Cache<AuthorizationCacheKey, AccessModeSet>,
}

impl MokaAuthorizationCache {
    /// Create a new [`MokaAuthorizationCache`] with given
    /// bounds.
    pub fn new(config: CacheConfig) -> Self {
        let cache = CacheBuilder::new(config.max_capacity)
            .time_to_live(config.time_to_live)
            .build();

        Self { cache }
    }
}

impl AuthorizationCache for MokaAuthorizationCache {
    fn resolve(
        &self,
        key: AuthorizationCacheKey,
        compute: ProbFuture<'static, AccessModeSet>,
    ) -> ProbFuture<'static, AccessModeSet> {
        let cache = self.cache.clone();

        Box::pin(async move {
            cache.try_get_with(key, compute).await.map_err(|e| {
                error!("Error in shared authorization resolution. Error:\n {}", e);
                SHARED_RESOLUTION_FAILED
                    .new_problem_builder()
                    .source(e)
                    .finish()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use claims::assert_ok;
    use oxrdf::NamedNode;
    use trellis_space::resource::uri::ResourceUri;

    use super::*;
    use crate::model::AccessMode;

    fn key(target: &str) -> AuthorizationCacheKey {
        AuthorizationCacheKey {
            target: ResourceUri::try_new_from(target).expect("Claimed valid uri"),
            agent: NamedNode::new("https://example.org/agent#i").expect("Claimed valid iri"),
            delegator: None,
        }
    }

    fn counting_compute(
        counter: Arc<AtomicUsize>,
        modes: AccessModeSet,
    ) -> ProbFuture<'static, AccessModeSet> {
        Box::pin(async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(modes)
        })
    }

    #[tokio::test]
    async fn fresh_entries_are_reused() {
        let cache = MokaAuthorizationCache::new(CacheConfig::default());
        let counter = Arc::new(AtomicUsize::new(0));

        let first = assert_ok!(
            cache
                .resolve(
                    key("trellis:data/resource"),
                    counting_compute(counter.clone(), AccessMode::Read.into()),
                )
                .await
        );
        let second = assert_ok!(
            cache
                .resolve(
                    key("trellis:data/resource"),
                    counting_compute(counter.clone(), AccessMode::Write.into()),
                )
                .await
        );

        assert_eq!(first, second);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn concurrent_misses_share_one_computation() {
        let cache = MokaAuthorizationCache::new(CacheConfig::default());
        let counter = Arc::new(AtomicUsize::new(0));

        let resolutions = futures::future::join_all((0..16).map(|_| {
            cache.resolve(
                key("trellis:data/resource"),
                counting_compute(counter.clone(), AccessMode::Read.into()),
            )
        }))
        .await;

        for resolved in resolutions {
            assert_eq!(assert_ok!(resolved), AccessModeSet::from(AccessMode::Read));
        }
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn distinct_sessions_resolve_independently() {
        let cache = MokaAuthorizationCache::new(CacheConfig::default());
        let counter = Arc::new(AtomicUsize::new(0));

        let mut delegated = key("trellis:data/resource");
        delegated.delegator =
            Some(NamedNode::new("https://example.org/acoburn#i").expect("Claimed valid iri"));

        assert_ok!(
            cache
                .resolve(
                    key("trellis:data/resource"),
                    counting_compute(counter.clone(), AccessMode::Read.into()),
                )
                .await
        );
        assert_ok!(
            cache
                .resolve(
                    delegated,
                    counting_compute(counter.clone(), AccessModeSet::default()),
                )
                .await
        );

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
