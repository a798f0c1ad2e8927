//! I define the `acl:agentClass` attribute match service.
//!

use std::task::Poll;

use dyn_problem::{ProbFuture, Problem};
use ldp_vocab::{acl, foaf, trellis};
use tower::Service;

use super::AttributeMatchRequest;

/// An [`AttributeMatchService`](super::AttributeMatchService)
/// that resolves match for the `acl:agentClass` attribute.
#[derive(Debug, Clone, Default)]
pub struct AgentClassMatchService;

impl Service<AttributeMatchRequest> for AgentClassMatchService {
    type Response = bool;

    type Error = Problem;

    type Future = ProbFuture<'static, bool>;

    #[inline]
    fn poll_ready(&mut self, _cx: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    #[inline]
    fn call(&mut self, req: AttributeMatchRequest) -> Self::Future {
        Box::pin(futures::future::ready(Ok(Self::match_agent_class(req))))
    }
}

impl AgentClassMatchService {
    fn match_agent_class(req: AttributeMatchRequest) -> bool {
        // > foaf:Agent
        // >    Allows access to any agent, i.e., the public.
        if req.value.as_ref() == foaf::AGENT {
            return true;
        }

        // > acl:AuthenticatedAgent
        // >    Allows access to any authenticated agent.
        if req.value.as_ref() == acl::AUTHENTICATED_AGENT {
            return req.principal.as_ref() != trellis::ANONYMOUS_AGENT;
        }

        // Any other class is a literal match against the
        // principal.
        req.value == req.principal
    }
}
