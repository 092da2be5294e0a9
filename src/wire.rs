//! Canonical, index-based graph interchange.
//!
//! A [`WireGraph`] keeps only topology: a directed flag, a vertex count `N`
//! and an ordered list of `(source, target)` index pairs into `0..N`.
//! Coordinates and metadata are discarded.
//!
//! # Text form
//!
//! ```text
//! {"directed":false,"vertex_count":3,"edges":[[0,1],[1,2]]}
//! ```
//!
//! Exactly these three keys, in this order, with no whitespace. Decoding
//! accepts any JSON spelling of the same object, but rejects unknown or
//! missing keys, `null` fields, negative counts, edge arrays whose arity is
//! not two, out-of-range indices, self-loops and duplicate edges. For
//! undirected input `[i,j]` and `[j,i]` are duplicates of each other.
//!
//! Encoding a decoded canonical text reproduces it byte for byte.
//!
//! # Invariants
//! - `vertex_count <= MAX_VERTEX_COUNT`.
//! - Every index in `edges` is `< vertex_count`.
//! - No edge is a self-loop and no edge repeats.

use crate::error::{Error, Result};
use crate::geometry::Point2D;
use crate::graph::AttributedGraph;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Largest accepted vertex count, the range of a signed 32-bit count.
pub const MAX_VERTEX_COUNT: usize = i32::MAX as usize;

/// Topology of an [`AttributedGraph`] with vertices replaced by indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireGraph {
    directed: bool,
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

/// Serialized layout; field order fixes the key order of the output.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireRepr {
    directed: bool,
    vertex_count: usize,
    edges: Vec<[usize; 2]>,
}

impl WireGraph {
    /// Validates and builds a wire form. Fails with [`Error::MalformedInput`].
    pub fn new(directed: bool, vertex_count: usize, edges: Vec<(usize, usize)>) -> Result<Self> {
        if vertex_count > MAX_VERTEX_COUNT {
            return Err(Error::malformed(format!(
                "vertex count {} exceeds {}",
                vertex_count, MAX_VERTEX_COUNT
            )));
        }
        let mut seen = HashSet::with_capacity(edges.len());
        for (position, &(from, to)) in edges.iter().enumerate() {
            if from >= vertex_count || to >= vertex_count {
                return Err(Error::malformed(format!(
                    "edge {} references a vertex outside 0..{}",
                    position, vertex_count
                )));
            }
            if from == to {
                return Err(Error::malformed(format!(
                    "edge {} is a self-loop on vertex {}",
                    position, from
                )));
            }
            let key = if directed || from < to { (from, to) } else { (to, from) };
            if !seen.insert(key) {
                return Err(Error::malformed(format!(
                    "edge {} duplicates an earlier edge between {} and {}",
                    position, from, to
                )));
            }
        }
        Ok(Self {
            directed,
            vertex_count,
            edges,
        })
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Edges in their significant order.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Compact JSON text.
    pub fn to_json(&self) -> Result<String> {
        let repr = WireRepr {
            directed: self.directed,
            vertex_count: self.vertex_count,
            edges: self.edges.iter().map(|&(a, b)| [a, b]).collect(),
        };
        Ok(serde_json::to_string(&repr)?)
    }

    /// Parses and validates JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let repr: WireRepr = serde_json::from_str(text)
            .inspect_err(|e| debug!(error = %e, "rejected graph json"))?;
        let edges = repr.edges.into_iter().map(|[a, b]| (a, b)).collect();
        Self::new(repr.directed, repr.vertex_count, edges)
            .inspect_err(|e| debug!(error = %e, "rejected graph topology"))
    }
}

/// Numbers vertices by iteration order and keeps edge order and orientation.
pub fn to_wire_form(graph: &AttributedGraph) -> WireGraph {
    let index: HashMap<&Point2D, usize> = graph
        .vertices()
        .enumerate()
        .map(|(i, vertex)| (vertex, i))
        .collect();
    let edges = graph
        .edges()
        .filter_map(|(from, to)| Some((*index.get(from)?, *index.get(to)?)))
        .collect();
    WireGraph {
        directed: graph.is_directed(),
        vertex_count: graph.vertex_count(),
        edges,
    }
}

/// Builds a graph whose vertex `i` sits at `(i, 0)`.
///
/// Placing the synthetic vertices on the x axis keeps them distinct, so the
/// result has the wire form's topology and iteration order.
pub fn from_wire_form(wire: &WireGraph) -> Result<AttributedGraph> {
    let at = |i: usize| Point2D::from((i as u64, 0u64));
    let mut graph = AttributedGraph::new(wire.directed);
    for i in 0..wire.vertex_count {
        graph.add_vertex(at(i))?;
    }
    for &(from, to) in &wire.edges {
        graph.add_edge(&at(from), &at(to))?;
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_malformed(text: &str) {
        match WireGraph::from_json(text) {
            Err(Error::MalformedInput(_)) => {}
            other => panic!("expected MalformedInput for {:?}, got {:?}", text, other),
        }
    }

    #[test]
    fn canonical_text_round_trips_byte_for_byte() {
        for text in [
            r#"{"directed":false,"vertex_count":0,"edges":[]}"#,
            r#"{"directed":false,"vertex_count":3,"edges":[[0,1],[2,1]]}"#,
            r#"{"directed":true,"vertex_count":2,"edges":[[0,1],[1,0]]}"#,
            r#"{"directed":true,"vertex_count":5,"edges":[]}"#,
        ] {
            let wire = WireGraph::from_json(text).unwrap();
            assert_eq!(wire.to_json().unwrap(), text);
        }
    }

    #[test]
    fn non_canonical_spelling_is_accepted() {
        let wire = WireGraph::from_json(
            "{ \"edges\": [ [1, 0] ], \"vertex_count\": 2, \"directed\": true }",
        )
        .unwrap();
        assert_eq!(
            wire.to_json().unwrap(),
            r#"{"directed":true,"vertex_count":2,"edges":[[1,0]]}"#
        );
    }

    #[test]
    fn structural_failures() {
        assert_malformed("");
        assert_malformed("[]");
        assert_malformed("42");
        assert_malformed(r#"{"vertex_count":2,"edges":[]}"#);
        assert_malformed(r#"{"directed":false,"edges":[]}"#);
        assert_malformed(r#"{"directed":false,"vertex_count":2}"#);
        assert_malformed(r#"{"directed":null,"vertex_count":2,"edges":[]}"#);
        assert_malformed(r#"{"directed":false,"vertex_count":null,"edges":[]}"#);
        assert_malformed(r#"{"directed":false,"vertex_count":2,"edges":null}"#);
        assert_malformed(r#"{"directed":false,"vertex_count":-1,"edges":[]}"#);
        assert_malformed(r#"{"directed":"no","vertex_count":2,"edges":[]}"#);
        assert_malformed(r#"{"directed":false,"vertex_count":2,"edges":[],"name":"x"}"#);
    }

    #[test]
    fn edge_arity_failures() {
        assert_malformed(r#"{"directed":false,"vertex_count":3,"edges":[[0]]}"#);
        assert_malformed(r#"{"directed":false,"vertex_count":3,"edges":[[0,1,2]]}"#);
        assert_malformed(r#"{"directed":false,"vertex_count":3,"edges":[[]]}"#);
        assert_malformed(r#"{"directed":false,"vertex_count":3,"edges":[[0,-1]]}"#);
    }

    #[test]
    fn topology_failures() {
        assert_malformed(r#"{"directed":false,"vertex_count":2,"edges":[[0,2]]}"#);
        assert_malformed(r#"{"directed":false,"vertex_count":0,"edges":[[0,0]]}"#);
        assert_malformed(r#"{"directed":true,"vertex_count":2,"edges":[[1,1]]}"#);
        assert_malformed(r#"{"directed":true,"vertex_count":2,"edges":[[0,1],[0,1]]}"#);
        assert_malformed(r#"{"directed":false,"vertex_count":2,"edges":[[0,1],[1,0]]}"#);
    }

    #[test]
    fn oversized_vertex_count_is_rejected() {
        assert_malformed(
            r#"{"directed":false,"vertex_count":18446744073709551615,"edges":[]}"#,
        );
        assert_malformed(r#"{"directed":false,"vertex_count":2147483648,"edges":[]}"#);
        assert!(matches!(
            WireGraph::new(true, MAX_VERTEX_COUNT + 1, Vec::new()),
            Err(Error::MalformedInput(_))
        ));
        assert_eq!(
            WireGraph::new(true, MAX_VERTEX_COUNT, Vec::new())
                .unwrap()
                .vertex_count(),
            MAX_VERTEX_COUNT
        );
    }

    #[test]
    fn new_validates() {
        assert!(WireGraph::new(false, 2, vec![(0, 1)]).is_ok());
        assert!(matches!(
            WireGraph::new(false, 2, vec![(0, 1), (1, 0)]),
            Err(Error::MalformedInput(_))
        ));
        assert!(WireGraph::new(true, 2, vec![(0, 1), (1, 0)]).is_ok());
    }

    #[test]
    fn graph_to_wire_uses_insertion_order() {
        let mut graph = AttributedGraph::new(false);
        let a = Point2D::from((5, 5));
        let b = Point2D::from((-1, 0));
        let c = Point2D::from((0, 7));
        for v in [&a, &b, &c] {
            graph.add_vertex(v.clone()).unwrap();
        }
        graph.add_edge(&c, &a).unwrap();
        graph.add_edge(&a, &b).unwrap();
        graph.set_edge_metadatum(&a, &b, "weight", "3").unwrap();

        let wire = to_wire_form(&graph);
        assert!(!wire.is_directed());
        assert_eq!(wire.vertex_count(), 3);
        assert_eq!(wire.edges(), &[(2, 0), (0, 1)]);
        assert_eq!(
            wire.to_json().unwrap(),
            r#"{"directed":false,"vertex_count":3,"edges":[[2,0],[0,1]]}"#
        );
    }

    #[test]
    fn wire_to_graph_and_back() {
        let wire = WireGraph::new(true, 4, vec![(3, 0), (0, 1), (1, 3)]).unwrap();
        let graph = from_wire_form(&wire).unwrap();
        assert!(graph.is_directed());
        assert_eq!(graph.vertex_count(), 4);
        assert!(graph.has_edge(&Point2D::from((3, 0)), &Point2D::origin()));
        assert!(!graph.has_edge(&Point2D::origin(), &Point2D::from((3, 0))));
        assert_eq!(to_wire_form(&graph), wire);
    }
}
