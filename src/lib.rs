//! Exactgraph: exact 2D geometry and attributed graphs.
//!
//! This crate is the model layer beneath planar editors. It provides:
//! - [`Rational`]: an arbitrary-precision, always-reduced fraction. Every
//!   coordinate and weight is one, so geometry never suffers rounding.
//! - [`Point2D`], [`Range`] and [`Orthotope2D`]: points, closed intervals and
//!   axis-aligned boxes over rationals.
//! - [`AttributedGraph`]: vertices at unique points, directed or undirected
//!   edges, and string metadata on the graph, its vertices and its edges.
//! - [`WireGraph`]: an index-based topology form with a strict JSON encoding.
//! - [`find_minimum_spanning_tree`]: Prim's algorithm with a caller-supplied
//!   weight function.
//!
//! # Exactness
//!
//! There is no floating-point path. Division is only available through
//! [`Rational::checked_div`] and [`Rational::inverse`], which report
//! [`Error::DivisionByZero`] instead of panicking.
//!
//! # Failure model
//!
//! Every fallible call returns [`Result`]. Mutators on [`AttributedGraph`]
//! validate before they mutate, so an error leaves the graph untouched.
//!
//! # Logging
//!
//! Graph mutations emit `tracing` events at `TRACE`; rejected JSON input and
//! spanning tree summaries are reported at `DEBUG`. Install any `tracing`
//! subscriber to see them.
//!
//! # Example
//!
//! ```
//! use exactgraph::prelude::*;
//!
//! let mut graph = AttributedGraph::new(false);
//! let a = Point2D::from((0, 0));
//! let b = Point2D::from((3, 4));
//! let c = Point2D::from((0, 1));
//! for v in [&a, &b, &c] {
//!     graph.add_vertex(v.clone()).unwrap();
//! }
//! graph.add_edge(&a, &b).unwrap();
//! graph.add_edge(&a, &c).unwrap();
//! graph.add_edge(&b, &c).unwrap();
//!
//! let tree = find_minimum_spanning_tree(&graph, &a, euclidean_quadrance).unwrap();
//! assert_eq!(tree.edge_count(), 2);
//! assert!(!tree.has_edge(&a, &b));
//!
//! let json = to_wire_form(&graph).to_json().unwrap();
//! assert_eq!(json, r#"{"directed":false,"vertex_count":3,"edges":[[0,1],[0,2],[1,2]]}"#);
//! ```

pub mod binary;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod rational;
pub mod spanning_tree;
pub mod wire;

pub use binary::BinaryFormat;
pub use error::{Error, Result};
pub use geometry::{Orthotope2D, Point2D, Point3D, Range};
pub use graph::{AttributedGraph, Metadata};
pub use rational::Rational;
pub use spanning_tree::{euclidean_quadrance, find_minimum_spanning_tree, metadata_weight};
pub use wire::{from_wire_form, to_wire_form, WireGraph, MAX_VERTEX_COUNT};

/// Prelude for convenient usage.
pub mod prelude {
    pub use crate::binary::BinaryFormat;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Orthotope2D, Point2D, Point3D, Range};
    pub use crate::graph::{
        is_reserved_metadata_key, AttributedGraph, Metadata, DUAL_EDGE_KEY,
        RESERVED_METADATA_KEYS, VERTEX_LOCATION_KEY,
    };
    pub use crate::rational::Rational;
    pub use crate::spanning_tree::{
        euclidean_quadrance, find_minimum_spanning_tree, metadata_weight, WEIGHT_KEY,
    };
    pub use crate::wire::{from_wire_form, to_wire_form, WireGraph, MAX_VERTEX_COUNT};
}
