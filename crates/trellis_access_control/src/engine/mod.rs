//! I define the wac authorization engine, which resolves whether
//! authorizations are matched by the principals of a session.
//!

use std::{collections::HashMap, fmt::Debug, sync::Arc};

use dyn_problem::{define_anon_problem_types, ProbResult};
use futures::{stream::FuturesUnordered, StreamExt};
use ldp_vocab::acl;
use oxrdf::NamedNode;
use tower::ServiceExt;
use tracing::{debug, error, info};

use self::attribute_match_svc::{
    agent::AgentMatchService, agent_class::AgentClassMatchService,
    agent_group::AgentGroupMatchService, AttributeMatchRequest, BoxedAttributeMatchService,
};
use crate::{
    group::GroupResolver,
    model::{authorization::Authorization, session::Session},
};

pub mod attribute_match_svc;

define_anon_problem_types!(
    /// Internal error in resolving attribute match.
    INTERNAL_MATCHER_ERROR: ("Internal error in resolving attribute match.");
);

/// [`WacEngine`] resolves whether authorizations are matched by
/// session principals, in conformance with the wac authorization
/// conformance rules.
///
/// An authorization is matched by a principal when any value of
/// any of its subject attributes matches, or when the principal
/// is the well-known administrator agent. Under delegation, the
/// agent and the delegator must be matched independently.
pub struct WacEngine {
    /// Attribute match services, keyed by attribute iri.
    subject_attribute_match_svcs: Arc<HashMap<NamedNode, BoxedAttributeMatchService>>,
}

impl Clone for WacEngine {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            subject_attribute_match_svcs: self.subject_attribute_match_svcs.clone(),
        }
    }
}

impl Debug for WacEngine {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WacEngine").finish()
    }
}

impl WacEngine {
    /// Get a new [`WacEngine`] with given subject attribute match
    /// services.
    #[inline]
    pub fn new(
        subject_attribute_match_svcs: Arc<HashMap<NamedNode, BoxedAttributeMatchService>>,
    ) -> Self {
        Self {
            subject_attribute_match_svcs,
        }
    }

    /// Get a new [`WacEngine`] with the standard attribute match
    /// services, resolving group membership through given
    /// resolver.
    pub fn new_standard(group_resolver: Arc<dyn GroupResolver>) -> Self {
        Self::new(Arc::new(
            [
                (
                    acl::AGENT.into_owned(),
                    Box::new(AgentMatchService) as BoxedAttributeMatchService,
                ),
                (
                    acl::AGENT_CLASS.into_owned(),
                    Box::new(AgentClassMatchService),
                ),
                (
                    acl::AGENT_GROUP.into_owned(),
                    Box::new(AgentGroupMatchService::new(group_resolver)),
                ),
            ]
            .into_iter()
            .collect(),
        ))
    }

    /// Resolve if given authorization is matched by given
    /// session. Under delegation, the agent and the delegator
    /// must both be matched independently.
    pub async fn is_matched_authorization(
        &self,
        authorization: &Authorization,
        session: &Session,
    ) -> ProbResult<bool> {
        if !self
            .is_matched_for_principal(authorization, session.agent())
            .await?
        {
            return Ok(false);
        }

        if let Some(delegator) = session.delegated_by() {
            return self.is_matched_for_principal(authorization, delegator).await;
        }

        Ok(true)
    }

    async fn is_matched_for_principal(
        &self,
        authorization: &Authorization,
        principal: &NamedNode,
    ) -> ProbResult<bool> {
        // The administrator agent matches every authorization.
        if principal.as_ref() == ldp_vocab::trellis::ADMINISTRATOR_AGENT {
            return Ok(true);
        }

        let attribute_values = [
            (acl::AGENT.into_owned(), &authorization.agents),
            (acl::AGENT_CLASS.into_owned(), &authorization.agent_classes),
            (acl::AGENT_GROUP.into_owned(), &authorization.agent_groups),
        ];

        let mut match_futs = FuturesUnordered::new();
        for (attribute, values) in attribute_values {
            let Some(svc) = self.subject_attribute_match_svcs.get(&attribute) else {
                continue;
            };

            for value in values {
                match_futs.push(svc.clone().oneshot(AttributeMatchRequest {
                    value: value.clone(),
                    principal: principal.clone(),
                }));
            }
        }

        if match_futs.is_empty() {
            info!("Authorization doesn't define any known attribute.");
            return Ok(false);
        }

        let mut last_error = None;
        while let Some(resolved) = match_futs.next().await {
            match resolved {
                Ok(true) => {
                    debug!("Attribute value matched for principal {}.", principal);
                    return Ok(true);
                }
                Ok(false) => {}
                Err(e) => {
                    info!(
                        "Unknown error in resolving attribute value match. Error:\n {}",
                        e
                    );
                    last_error = Some(e);
                }
            }
        }

        if let Some(e) = last_error {
            error!("Error in resolving attribute match.");
            return Err(INTERNAL_MATCHER_ERROR
                .new_problem_builder()
                .source(e)
                .finish());
        }

        Ok(false)
    }
}
