//! I define definitions and implementations for attribute match
//! services, which resolve whether a single authorization
//! attribute value applies to a principal.
//!

use dyn_clone::{clone_trait_object, DynClone};
use dyn_problem::{ProbFuture, Problem};
use oxrdf::NamedNode;
use tower::Service;

pub mod agent;
pub mod agent_class;
pub mod agent_group;

/// Struct representing an attribute match request.
#[derive(Debug, Clone)]
pub struct AttributeMatchRequest {
    /// Value of the attribute to be matched.
    pub value: NamedNode,

    /// Principal against which the attribute value have to be
    /// matched.
    pub principal: NamedNode,
}

/// A trait for services that resolve attribute match against a
/// principal.
pub trait AttributeMatchService:
    Service<
        AttributeMatchRequest,
        Response = bool,
        Error = Problem,
        Future = ProbFuture<'static, bool>,
    > + DynClone
    + Send
    + Sync
    + 'static
{
}

impl<S> AttributeMatchService for S where
    S: Service<
            AttributeMatchRequest,
            Response = bool,
            Error = Problem,
            Future = ProbFuture<'static, bool>,
        > + DynClone
        + Send
        + Sync
        + 'static
{
}

/// Type alias for type erased attribute match services.
pub type BoxedAttributeMatchService = Box<dyn AttributeMatchService>;

clone_trait_object!(AttributeMatchService);
