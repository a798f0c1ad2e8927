//! I define the contract through which access control and other
//! components look up resources of the storage space.
//!

use std::{collections::HashSet, fmt::Debug};

use dyn_problem::ProbFuture;
use oxrdf::Graph;

use crate::resource::{
    kind::InteractionModel, state::ResourceState, uri::ResourceUri, ResourceRecord,
};

#[cfg(feature = "test-utils")]
pub mod mock;

/// A trait for services that materialize resource records.
/// Lookups complete asynchronously, and may fail.
pub trait ResourceService: Debug + Send + Sync + 'static {
    /// Get the state of the resource with given uri.
    fn get(&self, uri: &ResourceUri) -> ProbFuture<'static, ResourceState<ResourceRecord>>;

    /// Get the set of interaction models supported by this
    /// server.
    fn supported_interaction_models(&self) -> &HashSet<InteractionModel>;
}

/// A trait for resource services that can also create resources
/// and install acl statements. Consumed by the root bootstrap
/// alone.
pub trait ResourceStore: ResourceService {
    /// Create a container resource with given uri and interaction
    /// model.
    fn create_container(
        &self,
        uri: ResourceUri,
        interaction_model: InteractionModel,
    ) -> ProbFuture<'static, ()>;

    /// Replace the acl statements of the resource with given uri.
    fn replace_acl(&self, uri: ResourceUri, acl: Graph) -> ProbFuture<'static, ()>;
}
