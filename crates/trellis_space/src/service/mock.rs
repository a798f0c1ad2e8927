//! I provide an in-memory mock implementation of the resource
//! service contract, for use in tests.
//!

use std::{
    collections::{HashMap, HashSet},
    future::ready,
    sync::RwLock,
};

use dyn_problem::{define_anon_problem_types, ProbFuture};
use oxrdf::Graph;

use super::{ResourceService, ResourceStore};
use crate::resource::{
    kind::InteractionModel, state::ResourceState, uri::ResourceUri, ResourceRecord,
};

define_anon_problem_types!(
    /// Mock lookup failure.
    MOCK_LOOKUP_FAILURE: ("Mock lookup failure.");

    /// Unknown mock resource.
    UNKNOWN_MOCK_RESOURCE: ("Unknown mock resource.");
);

/// An in-memory [`ResourceService`] and [`ResourceStore`] over a
/// map of resource records. Uris without an entry resolve as
/// missing, and uris marked as failing resolve to an error.
#[derive(Debug)]
pub struct MockResourceService {
    space: RwLock<MockSpace>,
    supported_interaction_models: HashSet<InteractionModel>,
}

#[derive(Debug, Default)]
struct MockSpace {
    resources: HashMap<ResourceUri, ResourceState<ResourceRecord>>,
    failing: HashSet<ResourceUri>,
}

impl MockResourceService {
    /// Create a new empty [`MockResourceService`] supporting all
    /// interaction models.
    pub fn new() -> Self {
        Self {
            space: RwLock::default(),
            supported_interaction_models: InteractionModel::ALL.iter().copied().collect(),
        }
    }

    /// Set the supported interaction models.
    pub fn with_supported_interaction_models(
        mut self,
        supported: impl IntoIterator<Item = InteractionModel>,
    ) -> Self {
        self.supported_interaction_models = supported.into_iter().collect();
        self
    }

    /// Insert given resource record.
    pub fn insert(&self, record: ResourceRecord) {
        self.space
            .write()
            .expect("Mock space lock must not be poisoned")
            .resources
            .insert(record.uri().clone(), ResourceState::Existing(record));
    }

    /// Insert a tombstone for the resource with given uri.
    pub fn insert_deleted(&self, uri: ResourceUri) {
        self.space
            .write()
            .expect("Mock space lock must not be poisoned")
            .resources
            .insert(uri, ResourceState::Deleted);
    }

    /// Mark lookups of given uri as failing.
    pub fn mark_failing(&self, uri: ResourceUri) {
        self.space
            .write()
            .expect("Mock space lock must not be poisoned")
            .failing
            .insert(uri);
    }
}

impl ResourceService for MockResourceService {
    fn get(&self, uri: &ResourceUri) -> ProbFuture<'static, ResourceState<ResourceRecord>> {
        let space = self
            .space
            .read()
            .expect("Mock space lock must not be poisoned");

        let result = if space.failing.contains(uri) {
            Err(MOCK_LOOKUP_FAILURE
                .new_problem_builder()
                .message(format!("Lookup of <{}> is marked as failing.", uri))
                .finish())
        } else {
            Ok(space
                .resources
                .get(uri)
                .cloned()
                .unwrap_or(ResourceState::Missing))
        };

        Box::pin(ready(result))
    }

    #[inline]
    fn supported_interaction_models(&self) -> &HashSet<InteractionModel> {
        &self.supported_interaction_models
    }
}

impl ResourceStore for MockResourceService {
    fn create_container(
        &self,
        uri: ResourceUri,
        interaction_model: InteractionModel,
    ) -> ProbFuture<'static, ()> {
        self.insert(ResourceRecord::new(uri, interaction_model));
        Box::pin(ready(Ok(())))
    }

    fn replace_acl(&self, uri: ResourceUri, acl: Graph) -> ProbFuture<'static, ()> {
        let mut space = self
            .space
            .write()
            .expect("Mock space lock must not be poisoned");

        let result = match space.resources.get(&uri).and_then(|s| s.as_existing()) {
            Some(record) => {
                let updated = record.clone().with_acl(acl);
                space
                    .resources
                    .insert(uri, ResourceState::Existing(updated));
                Ok(())
            }
            None => Err(UNKNOWN_MOCK_RESOURCE
                .new_problem_builder()
                .message(format!("No existing resource at <{}>.", uri))
                .finish()),
        };

        Box::pin(ready(result))
    }
}
