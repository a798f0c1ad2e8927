//! This crate provides the http boundary of the web access
//! control engine: the request filter enforcing authorization
//! decisions, the response decoration advertising the acl
//! endpoint, the recognized configuration, and the root acl
//! bootstrap.
//!

#![warn(missing_docs)]
#![cfg_attr(doc_cfg, feature(doc_auto_cfg))]
#![deny(unused_qualifications)]

use std::sync::Arc;

use trellis_access_control::{
    cache::{impl_::{MokaAuthorizationCache, NoopAuthorizationCache}, CacheConfig},
    evaluator::{
        impl_::{cached::CachingAccessEvaluator, wac::{WacAccessEvaluator, WacEvaluatorConfig}},
        AccessEvaluator,
    },
};
use trellis_space::{resource::uri::InvalidResourceUri, service::ResourceService};

use self::{config::AccessControlConfig, filter::WebAcLayer};

pub mod challenge;
pub mod config;
pub mod filter;
pub mod header;
pub mod initializer;

/// Assemble the standard enforcement layer for given resource
/// service and configuration. The evaluator is wrapped behind a
/// bounded cache, or behind the no-op cache when caching is
/// disabled.
pub fn standard_webac_layer<RS: ResourceService>(
    resource_service: Arc<RS>,
    config: &AccessControlConfig,
) -> Result<WebAcLayer<dyn AccessEvaluator>, InvalidResourceUri> {
    let mut evaluator_config = WacEvaluatorConfig::new(config.root_uri()?);
    evaluator_config.membership_check_enabled = config.webac.membership_check;

    let evaluator = Arc::new(WacAccessEvaluator::new(resource_service, evaluator_config));

    let evaluator: Arc<dyn AccessEvaluator> = if config.webac.cache_size == 0 {
        Arc::new(CachingAccessEvaluator::new(evaluator, NoopAuthorizationCache))
    } else {
        Arc::new(CachingAccessEvaluator::new(
            evaluator,
            MokaAuthorizationCache::new(CacheConfig {
                max_capacity: config.webac.cache_size,
                time_to_live: std::time::Duration::from_secs(config.webac.cache_expire_seconds),
            }),
        ))
    };

    Ok(WebAcLayer::new(evaluator, Arc::new(config.into())))
}
