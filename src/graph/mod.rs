//! Attributed planar graphs.
//!
//! An [`AttributedGraph`] has [`Point2D`] vertices and optional edges between
//! distinct vertices. The graph itself, every vertex and every edge carry a
//! string-to-string [`Metadata`] dictionary.
//!
//! # Invariants
//! - Vertices are unique points.
//! - No self-loops and no duplicate edges; in an undirected graph `(a, b)` and
//!   `(b, a)` are the same edge for every operation.
//! - Both endpoints of an edge are vertices of the graph.
//! - Keys in [`RESERVED_METADATA_KEYS`] cannot be written by callers. Each vertex
//!   carries its own text form under [`VERTEX_LOCATION_KEY`].
//! - The directed flag is fixed at construction.
//!
//! Every mutator checks all of its preconditions before touching any
//! container, so a failed call leaves the graph exactly as it was.
//!
//! Iteration over vertices and edges follows insertion order.

mod edge;
mod metadata;
mod operations;

pub(crate) use edge::EdgeKey;
pub use metadata::{
    is_reserved_metadata_key, Metadata, DUAL_EDGE_KEY, RESERVED_METADATA_KEYS, VERTEX_LOCATION_KEY,
};

use crate::error::{Error, Result};
use crate::geometry::Point2D;
use std::collections::HashMap;

/// A mutable graph of exact points with metadata on every entity.
///
/// Not internally synchronized: one owner mutates it at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributedGraph {
    directed: bool,
    /// Vertices in insertion order.
    vertices: Vec<Point2D>,
    /// Membership and per-vertex metadata.
    vertex_metadata: HashMap<Point2D, Metadata>,
    /// Neighbours in edge insertion order: successors when directed, both
    /// directions when undirected.
    adjacency: HashMap<Point2D, Vec<Point2D>>,
    /// Edges in insertion order, oriented as the caller added them.
    edges: Vec<(Point2D, Point2D)>,
    /// Membership and per-edge metadata.
    edge_metadata: HashMap<EdgeKey, Metadata>,
    graph_metadata: Metadata,
}

impl AttributedGraph {
    /// Creates an empty graph; `directed` cannot change afterwards.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            vertices: Vec::new(),
            vertex_metadata: HashMap::new(),
            adjacency: HashMap::new(),
            edges: Vec::new(),
            edge_metadata: HashMap::new(),
            graph_metadata: Metadata::new(),
        }
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Point2D> {
        self.vertices.iter()
    }

    /// Edges in insertion order as `(from, to)` pairs, oriented as added.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2D, &Point2D)> {
        self.edges.iter().map(|(from, to)| (from, to))
    }

    #[inline]
    pub fn has_vertex(&self, vertex: &Point2D) -> bool {
        self.vertex_metadata.contains_key(vertex)
    }

    /// True if the edge exists. Unknown endpoints simply yield `false`.
    pub fn has_edge(&self, from: &Point2D, to: &Point2D) -> bool {
        self.edge_metadata.contains_key(&self.edge_key(from, to))
    }

    /// Neighbours of `vertex` in edge insertion order.
    ///
    /// For a directed graph these are the targets of its outgoing edges.
    pub fn neighbours(&self, vertex: &Point2D) -> Result<&[Point2D]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownVertex(vertex.clone()))
    }

    pub fn num_neighbours(&self, vertex: &Point2D) -> Result<usize> {
        Ok(self.neighbours(vertex)?.len())
    }

    pub(crate) fn edge_key(&self, from: &Point2D, to: &Point2D) -> EdgeKey {
        EdgeKey::new(from, to, self.directed)
    }

    pub(crate) fn require_vertex(&self, vertex: &Point2D) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::UnknownVertex(vertex.clone()))
        }
    }

    pub(crate) fn require_edge(&self, from: &Point2D, to: &Point2D) -> Result<EdgeKey> {
        let key = self.edge_key(from, to);
        if self.edge_metadata.contains_key(&key) {
            Ok(key)
        } else {
            Err(Error::UnknownEdge(from.clone(), to.clone()))
        }
    }
}
