//! I define types to represent resources in an ldp storage
//! space.
//!

use oxrdf::Graph;

use self::{kind::InteractionModel, uri::ResourceUri};

pub mod kind;
pub mod state;
pub mod uri;

/// A record materializing the metadata and statements of an
/// existing resource. Records are owned values, constructed per
/// decision and discarded afterwards.
#[derive(Debug, Clone)]
pub struct ResourceRecord {
    /// Uri of the resource.
    uri: ResourceUri,

    /// Interaction model of the resource.
    interaction_model: InteractionModel,

    /// Membership resource of the container, if any. Meaningful
    /// only for direct and indirect containers.
    membership_resource: Option<ResourceUri>,

    /// Access control statements carried by the resource itself.
    /// [`None`] implies the resource has no acl of its own.
    acl: Option<Graph>,

    /// User managed statements of the resource.
    user_managed: Graph,
}

impl ResourceRecord {
    /// Create a new [`ResourceRecord`] with given uri and
    /// interaction model, without any statements.
    pub fn new(uri: ResourceUri, interaction_model: InteractionModel) -> Self {
        Self {
            uri,
            interaction_model,
            membership_resource: None,
            acl: None,
            user_managed: Graph::default(),
        }
    }

    /// Set the membership resource of this record.
    pub fn with_membership_resource(mut self, membership_resource: ResourceUri) -> Self {
        self.membership_resource = Some(membership_resource);
        self
    }

    /// Set the acl statements of this record.
    pub fn with_acl(mut self, acl: Graph) -> Self {
        self.acl = Some(acl);
        self
    }

    /// Set the user managed statements of this record.
    pub fn with_user_managed(mut self, user_managed: Graph) -> Self {
        self.user_managed = user_managed;
        self
    }

    /// Get uri of the resource.
    #[inline]
    pub fn uri(&self) -> &ResourceUri {
        &self.uri
    }

    /// Get interaction model of the resource.
    #[inline]
    pub fn interaction_model(&self) -> InteractionModel {
        self.interaction_model
    }

    /// Get the membership resource of the container, if any.
    #[inline]
    pub fn membership_resource(&self) -> Option<&ResourceUri> {
        self.membership_resource.as_ref()
    }

    /// Check if the resource carries acl statements of its own.
    #[inline]
    pub fn has_acl(&self) -> bool {
        self.acl.is_some()
    }

    /// Get the acl statements of the resource, if it carries any.
    #[inline]
    pub fn acl_statements(&self) -> Option<&Graph> {
        self.acl.as_ref()
    }

    /// Get the user managed statements of the resource.
    #[inline]
    pub fn user_statements(&self) -> &Graph {
        &self.user_managed
    }
}
