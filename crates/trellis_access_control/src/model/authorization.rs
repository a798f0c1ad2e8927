//! I define the rust model of web access control authorization
//! statements, and their assembly from acl graphs.
//!

use std::collections::HashSet;

use ldp_vocab::acl;
use oxrdf::{Graph, NamedNode, NamedNodeRef, SubjectRef, TermRef};
use tracing::debug;
use trellis_space::resource::uri::ResourceUri;

use super::{AccessMode, AccessModeSet};

/// An authorization is a bundle of agent matchers, a set of
/// access modes, and the sets of resources it applies to,
/// assembled from the acl statements sharing a subject iri.
#[derive(Debug, Clone)]
pub struct Authorization {
    /// Iri of the authorization subject.
    pub identifier: NamedNode,

    /// Agents being given access rights.
    pub agents: HashSet<NamedNode>,

    /// Agent classes being given access rights.
    pub agent_classes: HashSet<NamedNode>,

    /// Agent groups being given access rights.
    pub agent_groups: HashSet<NamedNode>,

    /// Granted access modes.
    pub modes: AccessModeSet,

    /// Resources this authorization applies to directly.
    /// Values are slash-normalized at assembly.
    pub access_to: HashSet<NamedNode>,

    /// Container resources from which this authorization is
    /// inherited. Values are slash-normalized at assembly.
    pub default: HashSet<NamedNode>,
}

impl Authorization {
    /// Assemble all authorizations of given acl graph, one per
    /// distinct subject iri. Blank node subjects and values are
    /// dropped, as are malformed authorizations that name no
    /// access object, or no agent, class, or group.
    pub fn assemble_all(acl_graph: &Graph, root: &ResourceUri) -> Vec<Self> {
        let subjects: HashSet<NamedNode> = acl_graph
            .iter()
            .filter_map(|triple| match triple.subject {
                SubjectRef::NamedNode(subject) => Some(subject.into_owned()),
                _ => None,
            })
            .collect();

        subjects
            .into_iter()
            .filter_map(|subject| Self::assemble(acl_graph, subject, root))
            .collect()
    }

    /// Assemble the authorization with given subject iri from
    /// given acl graph. Returns [`None`] if it is malformed.
    fn assemble(acl_graph: &Graph, subject: NamedNode, root: &ResourceUri) -> Option<Self> {
        let authorization = Self {
            agents: iri_objects(acl_graph, subject.as_ref(), acl::AGENT).collect(),
            agent_classes: iri_objects(acl_graph, subject.as_ref(), acl::AGENT_CLASS).collect(),
            agent_groups: iri_objects(acl_graph, subject.as_ref(), acl::AGENT_GROUP).collect(),
            modes: acl_graph
                .objects_for_subject_predicate(subject.as_ref(), acl::MODE)
                .filter_map(|term| match term {
                    TermRef::NamedNode(node) => AccessMode::from_term(node),
                    _ => None,
                })
                .fold(AccessModeSet::default(), |modes, mode| modes | mode),
            access_to: iri_objects(acl_graph, subject.as_ref(), acl::ACCESS_TO)
                .map(|value| normalize_access_object(value, root))
                .collect(),
            default: iri_objects(acl_graph, subject.as_ref(), acl::DEFAULT)
                .map(|value| normalize_access_object(value, root))
                .collect(),
            identifier: subject,
        };

        if authorization.access_to.is_empty() && authorization.default.is_empty() {
            debug!(
                "Ignoring authorization without access objects. Subject: {}",
                authorization.identifier
            );
            return None;
        }

        if authorization.agents.is_empty()
            && authorization.agent_classes.is_empty()
            && authorization.agent_groups.is_empty()
        {
            debug!(
                "Ignoring authorization without access subjects. Subject: {}",
                authorization.identifier
            );
            return None;
        }

        Some(authorization)
    }

    /// Check if this authorization applies directly to the
    /// resource with given normalized uri.
    #[inline]
    pub fn applies_to(&self, subject: &NamedNode) -> bool {
        self.access_to.contains(subject)
    }

    /// Check if this authorization is inheritable from the
    /// container with given normalized uri.
    #[inline]
    pub fn applies_as_default_of(&self, container: &NamedNode) -> bool {
        self.default.contains(container)
    }

    /// Check if given principal could match this authorization
    /// only through the `acl:AuthenticatedAgent` class. Such an
    /// authorization does not apply to the anonymous session.
    /// An authorization naming agent groups is never reported as
    /// authenticated-only, as a group may still name the
    /// principal.
    pub fn only_matchable_as_authenticated(&self, principal: &NamedNode) -> bool {
        self.agent_classes
            .contains(&acl::AUTHENTICATED_AGENT.into_owned())
            && !self.agents.contains(principal)
            && !self.agent_classes.contains(&ldp_vocab::foaf::AGENT.into_owned())
            && !self.agent_classes.contains(principal)
            && self.agent_groups.is_empty()
    }
}

/// Iterate over the iri objects of given subject and predicate.
/// Blank node and literal values never match anything, and are
/// dropped.
fn iri_objects<'g>(
    graph: &'g Graph,
    subject: NamedNodeRef<'g>,
    predicate: NamedNodeRef<'g>,
) -> impl Iterator<Item = NamedNode> + 'g {
    graph
        .objects_for_subject_predicate(subject, predicate)
        .filter_map(|term| match term {
            TermRef::NamedNode(node) => Some(node.into_owned()),
            _ => None,
        })
}

/// Normalize an `accessTo`/`default` value. A trailing slash is
/// stripped, unless the value equals the root uri.
fn normalize_access_object(value: NamedNode, root: &ResourceUri) -> NamedNode {
    ResourceUri::from(value).normalized_in(root).into_named_node()
}

#[cfg(test)]
mod tests {
    use claims::assert_some;
    use oxrdf::{BlankNode, Literal, Triple};

    use super::*;

    fn node(iri: &str) -> NamedNode {
        NamedNode::new(iri).expect("Claimed valid iri")
    }

    fn graph_of(triples: &[Triple]) -> Graph {
        let mut graph = Graph::new();
        for triple in triples {
            graph.insert(triple);
        }
        graph
    }

    fn root() -> ResourceUri {
        ResourceUri::try_new_from("trellis:data/").expect("Claimed valid uri")
    }

    #[test]
    fn well_formed_authorization_is_assembled() {
        let auth = node("trellis:data/#auth");
        let graph = graph_of(&[
            Triple::new(auth.clone(), acl::AGENT.into_owned(), node("https://example.org/agent")),
            Triple::new(auth.clone(), acl::MODE.into_owned(), acl::READ.into_owned()),
            Triple::new(auth.clone(), acl::MODE.into_owned(), acl::APPEND.into_owned()),
            Triple::new(auth.clone(), acl::ACCESS_TO.into_owned(), node("trellis:data/container/")),
        ]);

        let assembled = Authorization::assemble_all(&graph, &root());
        assert_eq!(assembled.len(), 1);

        let assembled = &assembled[0];
        assert_eq!(assembled.identifier, auth);
        assert_eq!(assembled.modes, AccessMode::Read | AccessMode::Append);
        // Trailing slash is normalized away on access objects.
        assert!(assembled
            .access_to
            .contains(&node("trellis:data/container")));
    }

    #[test]
    fn root_access_object_keeps_trailing_slash() {
        let auth = node("trellis:data/#auth");
        let graph = graph_of(&[
            Triple::new(auth.clone(), acl::AGENT.into_owned(), node("https://example.org/agent")),
            Triple::new(auth.clone(), acl::MODE.into_owned(), acl::READ.into_owned()),
            Triple::new(auth, acl::ACCESS_TO.into_owned(), node("trellis:data/")),
        ]);

        let assembled = assert_some!(Authorization::assemble_all(&graph, &root()).pop());
        assert!(assembled.access_to.contains(&node("trellis:data/")));
    }

    #[test]
    fn authorization_without_access_objects_is_dropped() {
        let auth = node("trellis:data/#auth");
        let graph = graph_of(&[
            Triple::new(auth.clone(), acl::AGENT.into_owned(), node("https://example.org/agent")),
            Triple::new(auth, acl::MODE.into_owned(), acl::READ.into_owned()),
        ]);

        assert!(Authorization::assemble_all(&graph, &root()).is_empty());
    }

    #[test]
    fn authorization_without_access_subjects_is_dropped() {
        let auth = node("trellis:data/#auth");
        let graph = graph_of(&[
            Triple::new(auth.clone(), acl::MODE.into_owned(), acl::READ.into_owned()),
            Triple::new(auth, acl::ACCESS_TO.into_owned(), node("trellis:data/a")),
        ]);

        assert!(Authorization::assemble_all(&graph, &root()).is_empty());
    }

    #[test]
    fn blank_and_literal_values_are_dropped() {
        let auth = node("trellis:data/#auth");
        let graph = graph_of(&[
            Triple::new(auth.clone(), acl::AGENT.into_owned(), BlankNode::default()),
            Triple::new(auth.clone(), acl::AGENT.into_owned(), Literal::new_simple_literal("agent")),
            Triple::new(auth.clone(), acl::AGENT.into_owned(), node("https://example.org/agent")),
            Triple::new(auth.clone(), acl::MODE.into_owned(), acl::WRITE.into_owned()),
            Triple::new(auth, acl::ACCESS_TO.into_owned(), node("trellis:data/a")),
        ]);

        let assembled = assert_some!(Authorization::assemble_all(&graph, &root()).pop());
        assert_eq!(assembled.agents.len(), 1);
    }

    #[test]
    fn authenticated_only_authorizations_are_recognized() {
        let anonymous = ldp_vocab::trellis::ANONYMOUS_AGENT.into_owned();
        let auth = node("trellis:data/#auth");

        let authenticated_only = assert_some!(Authorization::assemble_all(
            &graph_of(&[
                Triple::new(
                    auth.clone(),
                    acl::AGENT_CLASS.into_owned(),
                    acl::AUTHENTICATED_AGENT.into_owned(),
                ),
                Triple::new(auth.clone(), acl::MODE.into_owned(), acl::WRITE.into_owned()),
                Triple::new(auth.clone(), acl::ACCESS_TO.into_owned(), node("trellis:data/a")),
            ]),
            &root(),
        )
        .pop());
        assert!(authenticated_only.only_matchable_as_authenticated(&anonymous));

        // Naming the public class keeps the authorization in
        // play for the anonymous agent.
        let public = assert_some!(Authorization::assemble_all(
            &graph_of(&[
                Triple::new(
                    auth.clone(),
                    acl::AGENT_CLASS.into_owned(),
                    acl::AUTHENTICATED_AGENT.into_owned(),
                ),
                Triple::new(
                    auth.clone(),
                    acl::AGENT_CLASS.into_owned(),
                    ldp_vocab::foaf::AGENT.into_owned(),
                ),
                Triple::new(auth.clone(), acl::MODE.into_owned(), acl::READ.into_owned()),
                Triple::new(auth.clone(), acl::ACCESS_TO.into_owned(), node("trellis:data/a")),
            ]),
            &root(),
        )
        .pop());
        assert!(!public.only_matchable_as_authenticated(&anonymous));

        // So does naming an agent group.
        let with_group = assert_some!(Authorization::assemble_all(
            &graph_of(&[
                Triple::new(
                    auth.clone(),
                    acl::AGENT_CLASS.into_owned(),
                    acl::AUTHENTICATED_AGENT.into_owned(),
                ),
                Triple::new(
                    auth.clone(),
                    acl::AGENT_GROUP.into_owned(),
                    node("trellis:data/groups/team#all"),
                ),
                Triple::new(auth.clone(), acl::MODE.into_owned(), acl::READ.into_owned()),
                Triple::new(auth, acl::ACCESS_TO.into_owned(), node("trellis:data/a")),
            ]),
            &root(),
        )
        .pop());
        assert!(!with_group.only_matchable_as_authenticated(&anonymous));
    }

    #[test]
    fn unknown_modes_are_ignored() {
        let auth = node("trellis:data/#auth");
        let graph = graph_of(&[
            Triple::new(auth.clone(), acl::AGENT.into_owned(), node("https://example.org/agent")),
            Triple::new(auth.clone(), acl::MODE.into_owned(), node("https://example.org/Tamper")),
            Triple::new(auth.clone(), acl::MODE.into_owned(), acl::READ.into_owned()),
            Triple::new(auth, acl::ACCESS_TO.into_owned(), node("trellis:data/a")),
        ]);

        let assembled = assert_some!(Authorization::assemble_all(&graph, &root()).pop());
        assert_eq!(assembled.modes, AccessModeSet::from(AccessMode::Read));
    }
}
