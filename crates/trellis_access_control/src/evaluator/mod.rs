//! I define the interface and implementations of access-control
//! evaluators, which resolve the access modes a session holds on
//! a target resource.
//!

use std::{fmt::Debug, sync::Arc};

use dyn_problem::ProbFuture;
use trellis_space::resource::uri::ResourceUri;

use crate::model::{session::Session, AccessModeSet};

pub mod impl_;

/// A trait for access-control evaluators.
pub trait AccessEvaluator: Debug + Send + Sync + 'static {
    /// Resolve the set of access modes the session holds on the
    /// resource with given target uri.
    fn access_modes(
        &self,
        target: ResourceUri,
        session: Session,
    ) -> ProbFuture<'static, AccessModeSet>;
}

impl<E: AccessEvaluator + ?Sized> AccessEvaluator for Arc<E> {
    #[inline]
    fn access_modes(
        &self,
        target: ResourceUri,
        session: Session,
    ) -> ProbFuture<'static, AccessModeSet> {
        (**self).access_modes(target, session)
    }
}
