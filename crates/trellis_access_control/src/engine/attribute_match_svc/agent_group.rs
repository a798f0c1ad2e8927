//! I define the `acl:agentGroup` attribute match service.
//!

use std::{fmt::Debug, sync::Arc, task::Poll};

use dyn_problem::{ProbFuture, Problem};
use tower::Service;

use super::AttributeMatchRequest;
use crate::group::GroupResolver;

/// An [`AttributeMatchService`](super::AttributeMatchService)
/// that resolves match for the `acl:agentGroup` attribute,
/// through a group resolver.
#[derive(Debug, Clone)]
pub struct AgentGroupMatchService {
    /// Resolver of group membership.
    group_resolver: Arc<dyn GroupResolver>,
}

impl AgentGroupMatchService {
    /// Create a new [`AgentGroupMatchService`] over given group
    /// resolver.
    #[inline]
    pub fn new(group_resolver: Arc<dyn GroupResolver>) -> Self {
        Self { group_resolver }
    }
}

impl Service<AttributeMatchRequest> for AgentGroupMatchService {
    type Response = bool;

    type Error = Problem;

    type Future = ProbFuture<'static, bool>;

    #[inline]
    fn poll_ready(&mut self, _cx: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: AttributeMatchRequest) -> Self::Future {
        let members_fut = self.group_resolver.resolve(&req.value);

        Box::pin(async move {
            let members = members_fut.await?;
            Ok(members.contains(&req.principal))
        })
    }
}
