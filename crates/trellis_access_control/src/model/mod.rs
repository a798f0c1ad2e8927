//! I define rust models for concepts and entities involved in
//! access control over resources of an ldp storage space.
//!

use std::fmt::{Debug, Display};

use flagset::{flags, FlagSet};
use oxrdf::NamedNodeRef;

pub mod authorization;
pub mod session;

flags! {
    /// An enum representing a web access control access mode.
    pub enum AccessMode: u8 {
        /// Mode required to read a resource.
        Read,

        /// Mode required to overwrite or delete a resource.
        Write,

        /// Mode required to add to a resource without
        /// overwriting existing data.
        Append,

        /// Mode required to read or modify the acl of a
        /// resource, and to read audit data.
        Control,
    }
}

/// Type of access mode sets.
pub type AccessModeSet = FlagSet<AccessMode>;

impl Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl AccessMode {
    /// Slice of all access modes.
    pub const ALL: &'static [Self] = &[Self::Read, Self::Write, Self::Append, Self::Control];

    /// Get the acl term corresponding to this access mode.
    pub fn term(&self) -> NamedNodeRef<'static> {
        match self {
            Self::Read => ldp_vocab::acl::READ,
            Self::Write => ldp_vocab::acl::WRITE,
            Self::Append => ldp_vocab::acl::APPEND,
            Self::Control => ldp_vocab::acl::CONTROL,
        }
    }

    /// Resolve the access mode corresponding to given acl term,
    /// if any.
    pub fn from_term(term: NamedNodeRef<'_>) -> Option<Self> {
        Self::ALL.iter().copied().find(|mode| mode.term() == term)
    }
}

#[cfg(test)]
mod tests {
    use claims::{assert_none, assert_some_eq};

    use super::*;

    #[test]
    fn term_mapping_round_trips() {
        for mode in AccessMode::ALL {
            assert_some_eq!(AccessMode::from_term(mode.term()), *mode);
        }
        assert_none!(AccessMode::from_term(ldp_vocab::acl::AUTHORIZATION));
    }

    #[test]
    fn full_set_contains_all_modes() {
        let full = AccessModeSet::full();
        for mode in AccessMode::ALL {
            assert!(full.contains(*mode));
        }
    }
}
