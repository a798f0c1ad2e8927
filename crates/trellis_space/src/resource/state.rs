//! I define types to represent the lookup state of a resource.
//!

/// An enum representing the state of a resource in the storage
/// space. `Missing` and `Deleted` are distinct sentinels: a
/// deleted resource is a tombstone, while a missing resource was
/// never created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState<R> {
    /// The resource exists, with given record.
    Existing(R),

    /// The resource was never created.
    Missing,

    /// The resource has been deleted.
    Deleted,
}

impl<R> ResourceState<R> {
    /// Check if the resource was never created.
    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Check if the resource has been deleted.
    #[inline]
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted)
    }

    /// Get a reference to the record of an existing resource.
    #[inline]
    pub fn as_existing(&self) -> Option<&R> {
        match self {
            Self::Existing(record) => Some(record),
            _ => None,
        }
    }

    /// Convert into the record of an existing resource.
    #[inline]
    pub fn into_existing(self) -> Option<R> {
        match self {
            Self::Existing(record) => Some(record),
            _ => None,
        }
    }
}
