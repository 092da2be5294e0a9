//! Error taxonomy shared by every component of the crate.
//!
//! All failures are local and synchronous: they are reported by the call that
//! violates a precondition and never leave a partially mutated value behind.

use crate::geometry::Point2D;
use thiserror::Error;

/// Failure reported by a fallible operation.
///
/// Queries that merely observe absence (e.g. [`AttributedGraph::has_edge`])
/// return `bool`/`Option` instead of an error.
///
/// [`AttributedGraph::has_edge`]: crate::graph::AttributedGraph::has_edge
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A present value violates a precondition (empty point set, directed MST input, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An interval would end up with `min > max`.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Text, binary or JSON input does not match the required grammar.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("graph already contains a vertex at {0}")]
    DuplicateVertex(Point2D),

    #[error("graph already contains an edge from {0} to {1}")]
    DuplicateEdge(Point2D, Point2D),

    #[error("edge endpoints are both {0}")]
    SelfLoop(Point2D),

    #[error("graph does not contain a vertex at {0}")]
    UnknownVertex(Point2D),

    #[error("graph does not contain an edge from {0} to {1}")]
    UnknownEdge(Point2D, Point2D),

    /// The metadata key is read-only to callers.
    #[error("metadata key {0:?} is reserved")]
    ReservedKey(String),

    #[error("division by zero")]
    DivisionByZero,
}

impl Error {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Error::MalformedInput(msg.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedInput(e.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
