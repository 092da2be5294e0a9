//! Edge identity.

use crate::geometry::Point2D;

/// Identity of an edge inside an [`AttributedGraph`](super::AttributedGraph).
///
/// In an undirected graph the endpoints are stored in ascending [`Point2D`]
/// order, so `(a, b)` and `(b, a)` produce the same key. In a directed graph
/// the key keeps the caller's orientation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct EdgeKey {
    from: Point2D,
    to: Point2D,
}

impl EdgeKey {
    pub(crate) fn new(from: &Point2D, to: &Point2D, directed: bool) -> Self {
        if !directed && to < from {
            Self {
                from: to.clone(),
                to: from.clone(),
            }
        } else {
            Self {
                from: from.clone(),
                to: to.clone(),
            }
        }
    }

    #[inline]
    pub fn from(&self) -> &Point2D {
        &self.from
    }

    #[inline]
    pub fn to(&self) -> &Point2D {
        &self.to
    }

    /// True if `vertex` is either endpoint.
    pub fn touches(&self, vertex: &Point2D) -> bool {
        &self.from == vertex || &self.to == vertex
    }
}
