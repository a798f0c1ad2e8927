//! I define the wac implementation of
//! [`AccessEvaluator`](crate::evaluator::AccessEvaluator).
//!

use std::{collections::HashSet, sync::Arc};

use dyn_problem::ProbFuture;
use futures::{stream::FuturesUnordered, StreamExt};
use tracing::{debug, warn};
use trellis_space::{
    resource::{kind::InteractionModel, state::ResourceState, uri::ResourceUri, ResourceRecord},
    service::ResourceService,
};

use crate::{
    engine::WacEngine,
    evaluator::AccessEvaluator,
    group::ResourceServiceGroupResolver,
    model::{authorization::Authorization, session::Session, AccessModeSet},
};

/// Configuration of [`WacAccessEvaluator`].
#[derive(Debug, Clone)]
pub struct WacEvaluatorConfig {
    /// Uri of the storage root resource.
    pub root_uri: ResourceUri,

    /// Whether write access to containers may be co-governed by
    /// the acl of their membership resource.
    pub membership_check_enabled: bool,
}

impl WacEvaluatorConfig {
    /// Create a new [`WacEvaluatorConfig`] with given root uri
    /// and membership check enabled.
    #[inline]
    pub fn new(root_uri: ResourceUri) -> Self {
        Self {
            root_uri,
            membership_check_enabled: true,
        }
    }
}

/// An [`AccessEvaluator`] resolving access modes in conformance
/// with the wac access control resolution algorithm.
///
/// The evaluator walks the ancestor chain of the target resource
/// child-to-root, and terminates at the first resource whose own
/// acl carries at least one authorization applicable to the
/// target. Authorizations discovered on the target apply through
/// their `acl:accessTo` objects; authorizations discovered on a
/// strict ancestor apply through their `acl:default` objects
/// alone.
#[derive(Debug)]
pub struct WacAccessEvaluator<RS> {
    /// Resource service to retrieve resource records from.
    resource_service: Arc<RS>,

    /// Engine resolving authorization matches.
    engine: WacEngine,

    /// Configuration.
    config: Arc<WacEvaluatorConfig>,
}

impl<RS> Clone for WacAccessEvaluator<RS> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            resource_service: self.resource_service.clone(),
            engine: self.engine.clone(),
            config: self.config.clone(),
        }
    }
}

impl<RS: ResourceService> WacAccessEvaluator<RS> {
    /// Create a new [`WacAccessEvaluator`] over given resource
    /// service, with the standard match services.
    pub fn new(resource_service: Arc<RS>, config: WacEvaluatorConfig) -> Self {
        let engine = WacEngine::new_standard(Arc::new(ResourceServiceGroupResolver::new(
            resource_service.clone(),
        )));
        Self::new_with_engine(resource_service, engine, config)
    }

    /// Create a new [`WacAccessEvaluator`] over given resource
    /// service and engine.
    #[inline]
    pub fn new_with_engine(
        resource_service: Arc<RS>,
        engine: WacEngine,
        config: WacEvaluatorConfig,
    ) -> Self {
        Self {
            resource_service,
            engine,
            config: Arc::new(config),
        }
    }

    /// Resolve access modes for given target, guarding against
    /// cyclic membership chains with given visited set.
    fn resolve_modes(
        &self,
        target: ResourceUri,
        session: Session,
        mut visited: HashSet<ResourceUri>,
    ) -> ProbFuture<'static, AccessModeSet> {
        let this = self.clone();

        Box::pin(async move {
            // The administrator agent is granted the full mode set
            // upfront, unless acting under delegation.
            if session.is_administrator() && session.delegated_by().is_none() {
                return Ok(AccessModeSet::full());
            }

            let root = this.config.root_uri.clone();

            // Comparisons and lookups use the normalized target.
            let target = target.normalized_in(&root);

            if !visited.insert(target.clone()) {
                debug!("Membership chain revisits <{}>. No modes granted.", target);
                return Ok(AccessModeSet::default());
            }

            // Fetch the target. A failed target lookup is treated
            // as a missing target.
            let target_state = match this.resource_service.get(&target).await {
                Ok(state) => state,
                Err(e) => {
                    warn!("Target lookup failed. Treating as missing. Error:\n {}", e);
                    ResourceState::Missing
                }
            };

            let (mut prefetched, mut cursor_uri) = match target_state {
                // No operation is permitted on a tombstone.
                ResourceState::Deleted => return Ok(AccessModeSet::default()),
                ResourceState::Existing(record) => (Some(record), target.clone()),
                // A missing target is a prospective child: the
                // direct parent takes over the `accessTo` subject
                // role, and the walk starts there.
                ResourceState::Missing => match target.parent_in(&root) {
                    Some(parent) => (None, parent),
                    None => return Ok(AccessModeSet::default()),
                },
            };

            let accessto_subject = cursor_uri.normalized_in(&root).into_named_node();

            let mut membership_legs = FuturesUnordered::new();
            let mut granted = AccessModeSet::default();

            loop {
                let record = match prefetched.take() {
                    Some(record) => Some(record),
                    None => match this.resource_service.get(&cursor_uri).await {
                        Ok(ResourceState::Existing(record)) => Some(record),
                        Ok(_) => None,
                        Err(e) => {
                            warn!(
                                "Ancestor lookup of <{}> failed. No modes granted. Error:\n {}",
                                cursor_uri, e
                            );
                            return Ok(AccessModeSet::default());
                        }
                    },
                };

                if let Some(record) = record {
                    // Independent membership-resource leg,
                    // combined by union below.
                    if let Some(member_uri) = this.membership_redirect_target(&record) {
                        if visited.contains(&member_uri.normalized_in(&root)) {
                            debug!(
                                "Membership resource <{}> closes a cycle. Yielding no modes.",
                                member_uri
                            );
                        } else {
                            membership_legs.push(this.resolve_modes(
                                member_uri,
                                session.clone(),
                                visited.clone(),
                            ));
                        }
                    }

                    if let Some(acl_graph) = record.acl_statements() {
                        let authorizations = Authorization::assemble_all(acl_graph, &root);
                        let cursor_node = cursor_uri.normalized_in(&root).into_named_node();

                        // An authorization the anonymous session
                        // could match only through
                        // `acl:AuthenticatedAgent` is treated as
                        // absent: it neither terminates the walk
                        // nor contributes modes.
                        let applicable: Vec<&Authorization> = authorizations
                            .iter()
                            .filter(|a| {
                                if cursor_node == accessto_subject {
                                    a.applies_to(&cursor_node)
                                } else {
                                    a.applies_as_default_of(&cursor_node)
                                }
                            })
                            .filter(|a| {
                                !(session.is_anonymous()
                                    && a.only_matchable_as_authenticated(session.agent()))
                            })
                            .collect();

                        // The first resource contributing at least
                        // one applicable authorization terminates
                        // the walk.
                        if !applicable.is_empty() {
                            for authorization in applicable {
                                if this
                                    .engine
                                    .is_matched_authorization(authorization, &session)
                                    .await?
                                {
                                    granted |= authorization.modes;
                                }
                            }
                            break;
                        }
                    }
                }

                match cursor_uri.parent_in(&root) {
                    Some(parent) => cursor_uri = parent,
                    None => break,
                }
            }

            while let Some(leg) = membership_legs.next().await {
                granted |= leg?;
            }

            Ok(granted)
        })
    }

    /// Get the membership resource co-governing given container
    /// record, if the redirection applies to it.
    fn membership_redirect_target(&self, record: &ResourceRecord) -> Option<ResourceUri> {
        if !self.config.membership_check_enabled {
            return None;
        }

        match record.interaction_model() {
            im @ (InteractionModel::DirectContainer | InteractionModel::IndirectContainer)
                if self
                    .resource_service
                    .supported_interaction_models()
                    .contains(&im) =>
            {
                record.membership_resource().cloned()
            }
            _ => None,
        }
    }
}

impl<RS: ResourceService> AccessEvaluator for WacAccessEvaluator<RS> {
    #[tracing::instrument(
        skip_all,
        name = "WacAccessEvaluator::access_modes",
        fields(%target)
    )]
    fn access_modes(
        &self,
        target: ResourceUri,
        session: Session,
    ) -> ProbFuture<'static, AccessModeSet> {
        self.resolve_modes(target, session, HashSet::new())
    }
}
