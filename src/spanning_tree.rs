//! Minimum spanning trees by Prim's algorithm.
//!
//! [`find_minimum_spanning_tree`] grows a tree from a start vertex, always
//! taking the cheapest edge that leaves the visited set. Edge weights are not
//! stored in the graph; a caller-supplied function computes them on demand
//! from the graph and the two endpoints, so they can come from geometry
//! ([`euclidean_quadrance`]) or from edge metadata ([`metadata_weight`]).
//!
//! # Determinism
//!
//! Candidates of equal weight are taken in the order they were discovered.
//! Discovery follows [`AttributedGraph::neighbours`], which is edge insertion
//! order, so the result is reproducible for a given graph and a pure weight
//! function.
//!
//! # Complexity
//!
//! `O(E log E)` weight evaluations and heap operations for the component
//! containing the start vertex. Vertices outside that component are never
//! visited.

use crate::error::{Error, Result};
use crate::geometry::Point2D;
use crate::graph::AttributedGraph;
use crate::rational::Rational;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use tracing::debug;

/// Edge metadatum read by [`metadata_weight`].
pub const WEIGHT_KEY: &str = "weight";

/// A frontier edge. `seq` is the discovery order and breaks weight ties.
type Candidate = Reverse<(Rational, u64, Point2D, Point2D)>;

/// Returns the minimum spanning tree of the component of `graph` that
/// contains `start`.
///
/// The result is a new undirected graph holding the visited vertices and the
/// selected edges, each oriented from the tree side to the newly reached
/// vertex. No metadata is copied.
///
/// # Errors
/// - [`Error::InvalidArgument`] if `graph` is directed.
/// - [`Error::UnknownVertex`] if `start` is not a vertex of `graph`.
pub fn find_minimum_spanning_tree<F>(
    graph: &AttributedGraph,
    start: &Point2D,
    weight: F,
) -> Result<AttributedGraph>
where
    F: Fn(&AttributedGraph, &Point2D, &Point2D) -> Rational,
{
    if graph.is_directed() {
        return Err(Error::InvalidArgument(
            "minimum spanning trees are defined only for undirected graphs".to_string(),
        ));
    }
    graph.require_vertex(start)?;

    let mut tree = AttributedGraph::new(false);
    let mut visited = HashSet::new();
    let mut frontier: BinaryHeap<Candidate> = BinaryHeap::new();
    let mut seq = 0u64;
    let mut examined = 0usize;
    let mut total = Rational::zero();

    let mut expand = |vertex: &Point2D,
                      visited: &HashSet<Point2D>,
                      frontier: &mut BinaryHeap<Candidate>|
     -> Result<()> {
        for next in graph.neighbours(vertex)? {
            if !visited.contains(next) {
                let w = weight(graph, vertex, next);
                frontier.push(Reverse((w, seq, vertex.clone(), next.clone())));
                seq += 1;
            }
        }
        Ok(())
    };

    visited.insert(start.clone());
    tree.add_vertex(start.clone())?;
    expand(start, &visited, &mut frontier)?;

    while let Some(Reverse((w, _, from, to))) = frontier.pop() {
        examined += 1;
        if !visited.insert(to.clone()) {
            continue;
        }
        tree.add_vertex(to.clone())?;
        tree.add_edge(&from, &to)?;
        total = total + w;
        expand(&to, &visited, &mut frontier)?;
    }

    debug!(
        start = %start,
        vertices = tree.vertex_count(),
        edges = tree.edge_count(),
        candidates = examined,
        total_weight = %total,
        "minimum spanning tree"
    );
    Ok(tree)
}

/// Squared Euclidean length of the edge.
///
/// Orders edges exactly as their lengths do while staying rational.
pub fn euclidean_quadrance(_graph: &AttributedGraph, from: &Point2D, to: &Point2D) -> Rational {
    Point2D::quadrance(from, to)
}

/// The edge's [`WEIGHT_KEY`] metadatum parsed as a [`Rational`], or its
/// quadrance when the metadatum is missing or unparsable.
pub fn metadata_weight(graph: &AttributedGraph, from: &Point2D, to: &Point2D) -> Rational {
    graph
        .edge_metadatum(from, to, WEIGHT_KEY)
        .ok()
        .flatten()
        .and_then(|text| text.parse().ok())
        .unwrap_or_else(|| Point2D::quadrance(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64) -> Point2D {
        Point2D::from((x, y))
    }

    /// Routes the summary events to the test output under `RUST_LOG=debug`.
    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn graph_of(vertices: &[Point2D], edges: &[(usize, usize)]) -> AttributedGraph {
        let mut graph = AttributedGraph::new(false);
        for v in vertices {
            graph.add_vertex(v.clone()).unwrap();
        }
        for &(a, b) in edges {
            graph.add_edge(&vertices[a], &vertices[b]).unwrap();
        }
        graph
    }

    fn edge_set(graph: &AttributedGraph) -> HashSet<(Point2D, Point2D)> {
        graph
            .edges()
            .map(|(a, b)| if a <= b { (a.clone(), b.clone()) } else { (b.clone(), a.clone()) })
            .collect()
    }

    fn total_weight(graph: &AttributedGraph, source: &AttributedGraph) -> Rational {
        graph
            .edges()
            .map(|(a, b)| metadata_weight(source, a, b))
            .sum()
    }

    #[test]
    fn single_vertex() {
        let graph = graph_of(&[p(0, 0)], &[]);
        let tree = find_minimum_spanning_tree(&graph, &p(0, 0), euclidean_quadrance).unwrap();
        assert_eq!(tree.vertex_count(), 1);
        assert_eq!(tree.edge_count(), 0);
        assert!(tree.has_vertex(&p(0, 0)));
    }

    #[test]
    fn single_edge() {
        let graph = graph_of(&[p(0, 0), p(2, 1)], &[(0, 1)]);
        let tree = find_minimum_spanning_tree(&graph, &p(2, 1), euclidean_quadrance).unwrap();
        assert_eq!(tree.vertex_count(), 2);
        assert!(tree.has_edge(&p(0, 0), &p(2, 1)));
        assert!(!tree.is_directed());
    }

    #[test]
    fn triangle_with_explicit_weights() {
        init_tracing();
        let (a, b, c) = (p(0, 0), p(10, 0), p(0, 10));
        let mut graph = graph_of(&[a.clone(), b.clone(), c.clone()], &[(0, 1), (0, 2), (1, 2)]);
        graph.set_edge_metadatum(&a, &b, WEIGHT_KEY, "2").unwrap();
        graph.set_edge_metadatum(&a, &c, WEIGHT_KEY, "1").unwrap();
        graph.set_edge_metadatum(&b, &c, WEIGHT_KEY, "3").unwrap();

        let tree = find_minimum_spanning_tree(&graph, &a, metadata_weight).unwrap();
        assert_eq!(tree.vertex_count(), 3);
        assert_eq!(
            edge_set(&tree),
            HashSet::from([(a.clone(), b.clone()), (a.clone(), c.clone())])
        );
        assert_eq!(total_weight(&tree, &graph), Rational::from(3));
        assert!(!tree.has_edge(&b, &c));
    }

    #[test]
    fn geometric_weights_prefer_short_edges() {
        init_tracing();
        // A unit square with one long diagonal.
        let vs = [p(0, 0), p(1, 0), p(1, 1), p(0, 1)];
        let graph = graph_of(&vs, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
        let tree = find_minimum_spanning_tree(&graph, &vs[0], euclidean_quadrance).unwrap();
        assert_eq!(tree.vertex_count(), 4);
        assert_eq!(tree.edge_count(), 3);
        assert!(!tree.has_edge(&vs[0], &vs[2]));
        let total: Rational = tree
            .edges()
            .map(|(a, b)| Point2D::quadrance(a, b))
            .sum();
        assert_eq!(total, Rational::from(3));
    }

    #[test]
    fn ties_follow_discovery_order() {
        let vs = [p(0, 0), p(1, 0), p(0, 1), p(1, 1)];
        let graph = graph_of(&vs, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let first = find_minimum_spanning_tree(&graph, &vs[0], |_, _, _| Rational::one()).unwrap();
        let second = find_minimum_spanning_tree(&graph, &vs[0], |_, _, _| Rational::one()).unwrap();
        assert_eq!(first, second);
        let edges: Vec<_> = first.edges().map(|(a, b)| (a.clone(), b.clone())).collect();
        assert_eq!(
            edges,
            vec![
                (vs[0].clone(), vs[1].clone()),
                (vs[0].clone(), vs[2].clone()),
                (vs[1].clone(), vs[3].clone()),
            ]
        );
    }

    #[test]
    fn disconnected_graph_yields_start_component() {
        let vs = [p(0, 0), p(1, 0), p(5, 5), p(6, 5)];
        let graph = graph_of(&vs, &[(0, 1), (2, 3)]);
        let tree = find_minimum_spanning_tree(&graph, &vs[2], euclidean_quadrance).unwrap();
        assert_eq!(tree.vertex_count(), 2);
        assert!(tree.has_edge(&vs[2], &vs[3]));
        assert!(!tree.has_vertex(&vs[0]));
    }

    #[test]
    fn metadata_is_not_copied() {
        let mut graph = graph_of(&[p(0, 0), p(1, 0)], &[(0, 1)]);
        graph.set_graph_metadatum("name", "g");
        graph.set_vertex_metadatum(&p(0, 0), "color", "red").unwrap();
        graph.set_edge_metadatum(&p(0, 0), &p(1, 0), WEIGHT_KEY, "4").unwrap();
        let tree = find_minimum_spanning_tree(&graph, &p(0, 0), metadata_weight).unwrap();
        assert!(tree.graph_metadata().is_empty());
        assert_eq!(tree.vertex_metadatum(&p(0, 0), "color").unwrap(), None);
        assert!(tree.edge_metadata(&p(0, 0), &p(1, 0)).unwrap().is_empty());
    }

    #[test]
    fn directed_input_is_rejected() {
        let mut graph = AttributedGraph::new(true);
        graph.add_vertex(p(0, 0)).unwrap();
        assert!(matches!(
            find_minimum_spanning_tree(&graph, &p(0, 0), euclidean_quadrance),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn unknown_start_is_rejected() {
        let graph = graph_of(&[p(0, 0)], &[]);
        assert_eq!(
            find_minimum_spanning_tree(&graph, &p(3, 3), euclidean_quadrance),
            Err(Error::UnknownVertex(p(3, 3)))
        );
    }

    #[test]
    fn metadata_weight_falls_back_to_quadrance() {
        let mut graph = graph_of(&[p(0, 0), p(3, 4)], &[(0, 1)]);
        assert_eq!(metadata_weight(&graph, &p(0, 0), &p(3, 4)), Rational::from(25));
        graph.set_edge_metadatum(&p(0, 0), &p(3, 4), WEIGHT_KEY, "not a number").unwrap();
        assert_eq!(metadata_weight(&graph, &p(0, 0), &p(3, 4)), Rational::from(25));
        graph.set_edge_metadatum(&p(0, 0), &p(3, 4), WEIGHT_KEY, "-7/2").unwrap();
        assert_eq!(
            metadata_weight(&graph, &p(3, 4), &p(0, 0)),
            Rational::new(-7, 2).unwrap()
        );
    }
}
