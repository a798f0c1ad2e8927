//! This crate provides ready to use [`NamedNodeRef`](oxrdf::NamedNodeRef)
//! constants for the vocabularies a linked data platform server deals with.
//!

#![warn(missing_docs)]
#![cfg_attr(doc_cfg, feature(doc_auto_cfg))]
#![deny(unused_qualifications)]

pub mod acl {
    //! [WebAC](https://solid.github.io/web-access-control-spec/) vocabulary.

    use oxrdf::NamedNodeRef;

    /// The class of authorization statements.
    pub const AUTHORIZATION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/auth/acl#Authorization");

    /// The class of agents that have been authenticated.
    pub const AUTHENTICATED_AGENT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/auth/acl#AuthenticatedAgent");

    /// Denotes the acl sub-resource of a resource.
    pub const ACCESS_CONTROL: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/auth/acl#accessControl");

    /// The resource to which access is being granted.
    pub const ACCESS_TO: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/auth/acl#accessTo");

    /// An agent being given access rights.
    pub const AGENT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/auth/acl#agent");

    /// A class of agents being given access rights.
    pub const AGENT_CLASS: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/auth/acl#agentClass");

    /// A group of agents being given access rights.
    pub const AGENT_GROUP: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/auth/acl#agentGroup");

    /// The container resource whose authorization can be applied to
    /// resources lower in the collection hierarchy.
    pub const DEFAULT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/auth/acl#default");

    /// A class of operations that agents can perform on a resource.
    pub const MODE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/auth/acl#mode");

    /// The read access mode.
    pub const READ: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/auth/acl#Read");

    /// The write access mode.
    pub const WRITE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/auth/acl#Write");

    /// The append access mode.
    pub const APPEND: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/auth/acl#Append");

    /// The control access mode.
    pub const CONTROL: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/auth/acl#Control");
}

pub mod foaf {
    //! [FOAF](http://xmlns.com/foaf/spec/) vocabulary.

    use oxrdf::NamedNodeRef;

    /// The class of all agents. Grants access to the public.
    pub const AGENT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/Agent");
}

pub mod vcard {
    //! [vCard](https://www.w3.org/TR/vcard-rdf/) vocabulary.

    use oxrdf::NamedNodeRef;

    /// The class of groups of agents.
    pub const GROUP: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/vcard/ns#Group");

    /// Denotes a member of a group.
    pub const HAS_MEMBER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/vcard/ns#hasMember");
}

pub mod ldp {
    //! [LDP](https://www.w3.org/TR/ldp/) vocabulary.

    use oxrdf::NamedNodeRef;

    /// The class of linked data platform resources.
    pub const RESOURCE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/ldp#Resource");

    /// The class of resources with an rdf representation.
    pub const RDF_SOURCE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/ldp#RDFSource");

    /// The class of resources without an rdf representation.
    pub const NON_RDF_SOURCE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/ldp#NonRDFSource");

    /// The class of container resources.
    pub const CONTAINER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/ldp#Container");

    /// The class of basic containers.
    pub const BASIC_CONTAINER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/ldp#BasicContainer");

    /// The class of direct containers.
    pub const DIRECT_CONTAINER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/ldp#DirectContainer");

    /// The class of indirect containers.
    pub const INDIRECT_CONTAINER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/ldp#IndirectContainer");

    /// Links a container to the resource its member relations are
    /// asserted about.
    pub const MEMBERSHIP_RESOURCE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/ldp#membershipResource");

    /// Links a container to the predicate used in its member relations.
    pub const HAS_MEMBER_RELATION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/ldp#hasMemberRelation");

    /// Links a container to its containment triples.
    pub const CONTAINS: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/ldp#contains");
}

pub mod trellis {
    //! Server vocabulary for well-known agents, graph names and
    //! sentinel resources.

    use oxrdf::NamedNodeRef;

    /// The agent with unrestricted access to all server resources.
    pub const ADMINISTRATOR_AGENT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.trellisldp.org/ns/trellis#AdministratorAgent");

    /// The agent attributed to unauthenticated sessions.
    pub const ANONYMOUS_AGENT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.trellisldp.org/ns/trellis#AnonymousAgent");

    /// The class of resources that have been deleted.
    pub const DELETED_RESOURCE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.trellisldp.org/ns/trellis#DeletedResource");

    /// Name of the graph holding audit statements.
    pub const PREFER_AUDIT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.trellisldp.org/ns/trellis#PreferAudit");

    /// Name of the graph holding access control statements.
    pub const PREFER_ACCESS_CONTROL: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.trellisldp.org/ns/trellis#PreferAccessControl");

    /// Name of the graph holding server managed statements.
    pub const PREFER_SERVER_MANAGED: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.trellisldp.org/ns/trellis#PreferServerManaged");

    /// Name of the graph holding user managed statements.
    pub const PREFER_USER_MANAGED: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.trellisldp.org/ns/trellis#PreferUserManaged");
}

#[cfg(test)]
mod tests {
    use oxrdf::NamedNode;

    use super::*;

    #[test]
    fn terms_are_valid_iris() {
        for term in [
            acl::AUTHORIZATION,
            acl::ACCESS_TO,
            acl::DEFAULT,
            foaf::AGENT,
            vcard::HAS_MEMBER,
            ldp::INDIRECT_CONTAINER,
            trellis::ADMINISTRATOR_AGENT,
            trellis::PREFER_AUDIT,
        ] {
            NamedNode::new(term.as_str()).expect("Claimed valid vocabulary iri");
        }
    }
}
