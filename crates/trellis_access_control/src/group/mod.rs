//! I define the agent group resolver, which materializes the
//! member sets of agent groups named by authorizations.
//!

use std::{collections::HashSet, fmt::Debug, sync::Arc};

use dyn_problem::ProbFuture;
use ldp_vocab::vcard;
use oxrdf::{NamedNode, TermRef};
use tracing::debug;
use trellis_space::{
    resource::{state::ResourceState, uri::ResourceUri},
    service::ResourceService,
};

/// A trait for resolvers of agent group membership.
pub trait GroupResolver: Debug + Send + Sync + 'static {
    /// Resolve the set of member agents of given agent group.
    /// Unresolvable groups contribute no members, and are not an
    /// error.
    fn resolve(&self, group: &NamedNode) -> ProbFuture<'static, HashSet<NamedNode>>;
}

/// A [`GroupResolver`] that retrieves the group as a resource
/// and scans its user managed statements for `vcard:hasMember`
/// triples about the group.
#[derive(Debug, Clone)]
pub struct ResourceServiceGroupResolver<RS> {
    /// Resource service to retrieve group resources from.
    resource_service: Arc<RS>,
}

impl<RS: ResourceService> ResourceServiceGroupResolver<RS> {
    /// Create a new [`ResourceServiceGroupResolver`] over given
    /// resource service.
    #[inline]
    pub fn new(resource_service: Arc<RS>) -> Self {
        Self { resource_service }
    }
}

impl<RS: ResourceService> GroupResolver for ResourceServiceGroupResolver<RS> {
    #[tracing::instrument(skip_all, name = "ResourceServiceGroupResolver::resolve", fields(%group))]
    fn resolve(&self, group: &NamedNode) -> ProbFuture<'static, HashSet<NamedNode>> {
        let group = group.clone();
        let resource_service = self.resource_service.clone();

        Box::pin(async move {
            // The group statements live in the document resource.
            // Any fragment on the group iri is stripped for the
            // lookup, but not for the subject comparison.
            let document_uri_str = group
                .as_str()
                .split_once('#')
                .map(|(document, _)| document)
                .unwrap_or_else(|| group.as_str());

            let document_uri = match ResourceUri::try_new_from(document_uri_str) {
                Ok(uri) => uri,
                Err(e) => {
                    debug!("Group iri has no valid document uri. Error:\n {}", e);
                    return Ok(HashSet::new());
                }
            };

            let record = match resource_service.get(&document_uri).await {
                Ok(ResourceState::Existing(record)) => record,
                Ok(_) => {
                    debug!("Group resource is missing or deleted. Group: {}", group);
                    return Ok(HashSet::new());
                }
                Err(e) => {
                    debug!("Group resource lookup failed. Error:\n {}", e);
                    return Ok(HashSet::new());
                }
            };

            // The group subject is accepted in literal and in
            // slash-trimmed form.
            let trimmed = ResourceUri::from(group.clone()).slash_trimmed().into_named_node();

            let mut members = HashSet::new();
            for subject in [&group, &trimmed] {
                members.extend(
                    record
                        .user_statements()
                        .objects_for_subject_predicate(subject.as_ref(), vcard::HAS_MEMBER)
                        .filter_map(|term| match term {
                            TermRef::NamedNode(node) => Some(node.into_owned()),
                            _ => None,
                        }),
                );
            }

            Ok(members)
        })
    }
}
