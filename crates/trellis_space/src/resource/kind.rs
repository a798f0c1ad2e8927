//! I define [`InteractionModel`].
//!

use std::fmt::{Debug, Display};

use oxrdf::NamedNodeRef;

/// An enum representing the ldp interaction model of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionModel {
    /// Rdf source interaction model.
    RdfSource,

    /// Non rdf source interaction model.
    NonRdfSource,

    /// Container interaction model.
    Container,

    /// Basic container interaction model.
    BasicContainer,

    /// Direct container interaction model.
    DirectContainer,

    /// Indirect container interaction model.
    IndirectContainer,
}

impl Display for InteractionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl InteractionModel {
    /// Slice of all interaction models.
    pub const ALL: &'static [Self] = &[
        Self::RdfSource,
        Self::NonRdfSource,
        Self::Container,
        Self::BasicContainer,
        Self::DirectContainer,
        Self::IndirectContainer,
    ];

    /// Check if this interaction model is a container model.
    /// Basic, direct, and indirect containers are all containers.
    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Container | Self::BasicContainer | Self::DirectContainer | Self::IndirectContainer
        )
    }

    /// Get the ldp term corresponding to this interaction model.
    pub fn term(&self) -> NamedNodeRef<'static> {
        match self {
            Self::RdfSource => ldp_vocab::ldp::RDF_SOURCE,
            Self::NonRdfSource => ldp_vocab::ldp::NON_RDF_SOURCE,
            Self::Container => ldp_vocab::ldp::CONTAINER,
            Self::BasicContainer => ldp_vocab::ldp::BASIC_CONTAINER,
            Self::DirectContainer => ldp_vocab::ldp::DIRECT_CONTAINER,
            Self::IndirectContainer => ldp_vocab::ldp::INDIRECT_CONTAINER,
        }
    }

    /// Resolve the interaction model corresponding to given ldp
    /// term, if any.
    pub fn from_term(term: NamedNodeRef<'_>) -> Option<Self> {
        Self::ALL.iter().copied().find(|im| im.term() == term)
    }
}
