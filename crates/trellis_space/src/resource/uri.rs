//! I define types to represent resource uris in an ldp storage
//! space.
//!

use std::fmt::Display;

use oxrdf::{IriParseError, NamedNode, NamedNodeRef};

/// A resource uri is an absolute iri identifying a resource in
/// the storage space. Equality is codepoint-exact. A trailing
/// slash on a non-root uri denotes a distinct value, and is only
/// stripped by the explicit normalization operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceUri(NamedNode);

impl ResourceUri {
    /// Try to create a new [`ResourceUri`] from given string.
    pub fn try_new_from(uri_str: &str) -> Result<Self, InvalidResourceUri> {
        Ok(Self(NamedNode::new(uri_str)?))
    }

    /// Get the uri as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Get the uri as a borrowed named node.
    #[inline]
    pub fn as_named_node(&self) -> NamedNodeRef<'_> {
        self.0.as_ref()
    }

    /// Convert into the inner named node.
    #[inline]
    pub fn into_named_node(self) -> NamedNode {
        self.0
    }

    /// Get a copy of this uri with at most one trailing slash
    /// stripped.
    pub fn slash_trimmed(&self) -> Self {
        match self.as_str().strip_suffix('/') {
            // Stripping a trailing slash from a valid absolute iri
            // yields a valid absolute iri, as the scheme separator
            // is never a slash.
            Some(trimmed) if !trimmed.is_empty() => Self(NamedNode::new_unchecked(trimmed)),
            _ => self.clone(),
        }
    }

    /// Normalize this uri for access-target comparison. A trailing
    /// slash is stripped, unless the value equals the given root
    /// uri.
    pub fn normalized_in(&self, root: &ResourceUri) -> Self {
        if self == root {
            self.clone()
        } else {
            self.slash_trimmed()
        }
    }

    /// Get the parent container uri of this resource in the space
    /// rooted at given root uri. The root has no parent, and
    /// neither does a uri outside of the root's namespace.
    pub fn parent_in(&self, root: &ResourceUri) -> Option<ResourceUri> {
        if self == root {
            return None;
        }

        let rel = self.as_str().strip_prefix(root.as_str())?;
        let rel = rel.strip_suffix('/').unwrap_or(rel);
        if rel.is_empty() {
            return None;
        }

        Some(match rel.rfind('/') {
            Some(idx) => Self(NamedNode::new_unchecked(format!(
                "{}{}",
                root.as_str(),
                &rel[..idx]
            ))),
            None => root.clone(),
        })
    }
}

impl Display for ResourceUri {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<NamedNode> for ResourceUri {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self(node)
    }
}

impl From<ResourceUri> for NamedNode {
    #[inline]
    fn from(uri: ResourceUri) -> Self {
        uri.0
    }
}

/// Invalid resource uri.
#[derive(Debug, thiserror::Error)]
#[error("Invalid resource uri.")]
pub struct InvalidResourceUri(#[from] IriParseError);

#[cfg(test)]
mod tests {
    use claims::{assert_none, assert_ok, assert_some_eq};
    use rstest::rstest;

    use super::*;

    fn uri(uri_str: &str) -> ResourceUri {
        assert_ok!(ResourceUri::try_new_from(uri_str))
    }

    #[rstest]
    #[case("trellis:data/a/", "trellis:data/a")]
    #[case("trellis:data/a", "trellis:data/a")]
    #[case("http://example.org/a/b/", "http://example.org/a/b")]
    fn slash_trimming_strips_at_most_one_slash(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(uri(raw).slash_trimmed().as_str(), expected);
    }

    #[test]
    fn normalization_preserves_root() {
        let root = uri("trellis:data/");
        assert_eq!(root.normalized_in(&root), root);
        assert_eq!(
            uri("trellis:data/a/").normalized_in(&root),
            uri("trellis:data/a")
        );
    }

    #[rstest]
    #[case("trellis:data/a/b", Some("trellis:data/a"))]
    #[case("trellis:data/a/b/", Some("trellis:data/a"))]
    #[case("trellis:data/a", Some("trellis:data/"))]
    #[case("trellis:data/a/b/c", Some("trellis:data/a/b"))]
    fn parent_drops_last_path_segment(#[case] raw: &str, #[case] expected: Option<&str>) {
        let root = uri("trellis:data/");
        match expected {
            Some(parent) => {
                assert_some_eq!(uri(raw).parent_in(&root), uri(parent));
            }
            None => {
                assert_none!(uri(raw).parent_in(&root));
            }
        }
    }

    #[test]
    fn root_has_no_parent() {
        let root = uri("trellis:data/");
        assert_none!(root.parent_in(&root));
    }

    #[test]
    fn foreign_uri_has_no_parent() {
        let root = uri("trellis:data/");
        assert_none!(uri("http://example.org/a/b").parent_in(&root));
    }
}
