//! I define the `acl:agent` attribute match service.
//!

use std::task::Poll;

use dyn_problem::{ProbFuture, Problem};
use tower::Service;

use super::AttributeMatchRequest;

/// An [`AttributeMatchService`](super::AttributeMatchService)
/// that resolves match for the `acl:agent` attribute. An agent
/// value matches the principal it names, exactly.
#[derive(Debug, Clone, Default)]
pub struct AgentMatchService;

impl Service<AttributeMatchRequest> for AgentMatchService {
    type Response = bool;

    type Error = Problem;

    type Future = ProbFuture<'static, bool>;

    #[inline]
    fn poll_ready(&mut self, _cx: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    #[inline]
    fn call(&mut self, req: AttributeMatchRequest) -> Self::Future {
        Box::pin(futures::future::ready(Ok(req.value == req.principal)))
    }
}
