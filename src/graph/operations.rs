//! Topology mutations of an [`AttributedGraph`].
//!
//! Each operation validates every precondition first and only then edits the
//! containers, so an `Err` means nothing changed.

use super::{AttributedGraph, EdgeKey};
use crate::error::{Error, Result};
use crate::geometry::Point2D;
use std::collections::HashSet;
use tracing::trace;

impl AttributedGraph {
    /// Adds an isolated vertex. Fails with [`Error::DuplicateVertex`] if present.
    pub fn add_vertex(&mut self, vertex: Point2D) -> Result<()> {
        if self.has_vertex(&vertex) {
            return Err(Error::DuplicateVertex(vertex));
        }
        trace!(vertex = %vertex, "add vertex");
        self.vertex_metadata
            .insert(vertex.clone(), Self::initial_vertex_metadata(&vertex));
        self.adjacency.insert(vertex.clone(), Vec::new());
        self.vertices.push(vertex);
        Ok(())
    }

    /// Removes a vertex together with every incident edge.
    pub fn remove_vertex(&mut self, vertex: &Point2D) -> Result<()> {
        self.require_vertex(vertex)?;
        trace!(vertex = %vertex, "remove vertex");
        let doomed = HashSet::from([vertex.clone()]);
        self.remove_vertex_set(&doomed);
        Ok(())
    }

    /// Removes several vertices at once.
    ///
    /// Fails with [`Error::UnknownVertex`] if any is absent and with
    /// [`Error::InvalidArgument`] if one is listed twice.
    pub fn remove_vertices<'a, I>(&mut self, vertices: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Point2D>,
    {
        let mut doomed = HashSet::new();
        for vertex in vertices {
            self.require_vertex(vertex)?;
            if !doomed.insert(vertex.clone()) {
                return Err(Error::InvalidArgument(format!(
                    "vertex {} listed more than once",
                    vertex
                )));
            }
        }
        trace!(count = doomed.len(), "remove vertices");
        self.remove_vertex_set(&doomed);
        Ok(())
    }

    fn remove_vertex_set(&mut self, doomed: &HashSet<Point2D>) {
        self.vertices.retain(|v| !doomed.contains(v));
        self.vertex_metadata.retain(|v, _| !doomed.contains(v));
        self.adjacency.retain(|v, _| !doomed.contains(v));
        for neighbours in self.adjacency.values_mut() {
            neighbours.retain(|n| !doomed.contains(n));
        }
        self.edges
            .retain(|(from, to)| !doomed.contains(from) && !doomed.contains(to));
        self.edge_metadata
            .retain(|key, _| !doomed.contains(key.from()) && !doomed.contains(key.to()));
    }

    /// Relocates a vertex, keeping its position in the iteration order, its
    /// edges and its metadata.
    ///
    /// Fails with [`Error::UnknownVertex`] if `from` is absent and with
    /// [`Error::DuplicateVertex`] if `to` is already taken. Moving a vertex
    /// onto itself is a no-op.
    pub fn move_vertex(&mut self, from: &Point2D, to: Point2D) -> Result<()> {
        self.require_vertex(from)?;
        if from == &to {
            return Ok(());
        }
        if self.has_vertex(&to) {
            return Err(Error::DuplicateVertex(to));
        }
        trace!(from = %from, to = %to, "move vertex");

        let relocate = |p: &mut Point2D| {
            if p == from {
                *p = to.clone();
            }
        };

        self.vertices.iter_mut().for_each(relocate);

        let mut metadata = self.vertex_metadata.remove(from).unwrap_or_default();
        metadata.insert(super::VERTEX_LOCATION_KEY.to_string(), to.to_string());
        self.vertex_metadata.insert(to.clone(), metadata);

        let neighbours = self.adjacency.remove(from).unwrap_or_default();
        self.adjacency.insert(to.clone(), neighbours);
        for list in self.adjacency.values_mut() {
            list.iter_mut().for_each(relocate);
        }

        for (a, b) in self.edges.iter_mut() {
            relocate(a);
            relocate(b);
        }

        // Undirected keys are re-derived because the canonical orientation
        // depends on the endpoint order.
        let directed = self.directed;
        let edge_metadata = std::mem::take(&mut self.edge_metadata);
        self.edge_metadata = edge_metadata
            .into_iter()
            .map(|(key, value)| {
                if key.touches(from) {
                    let mut a = key.from().clone();
                    let mut b = key.to().clone();
                    relocate(&mut a);
                    relocate(&mut b);
                    (EdgeKey::new(&a, &b, directed), value)
                } else {
                    (key, value)
                }
            })
            .collect();
        Ok(())
    }

    /// Adds an edge between two existing, distinct vertices.
    ///
    /// Fails with [`Error::UnknownVertex`], [`Error::SelfLoop`] or
    /// [`Error::DuplicateEdge`]; in an undirected graph the reverse of an
    /// existing edge is a duplicate.
    pub fn add_edge(&mut self, from: &Point2D, to: &Point2D) -> Result<()> {
        self.require_vertex(from)?;
        self.require_vertex(to)?;
        if from == to {
            return Err(Error::SelfLoop(from.clone()));
        }
        let key = self.edge_key(from, to);
        if self.edge_metadata.contains_key(&key) {
            return Err(Error::DuplicateEdge(from.clone(), to.clone()));
        }
        trace!(from = %from, to = %to, "add edge");
        self.edge_metadata.insert(key, Default::default());
        self.edges.push((from.clone(), to.clone()));
        if let Some(list) = self.adjacency.get_mut(from) {
            list.push(to.clone());
        }
        if !self.directed {
            if let Some(list) = self.adjacency.get_mut(to) {
                list.push(from.clone());
            }
        }
        Ok(())
    }

    /// Removes an edge and its metadata. Fails with [`Error::UnknownEdge`] if absent.
    pub fn remove_edge(&mut self, from: &Point2D, to: &Point2D) -> Result<()> {
        let key = self.require_edge(from, to)?;
        trace!(from = %from, to = %to, "remove edge");
        self.edge_metadata.remove(&key);
        let directed = self.directed;
        self.edges
            .retain(|(a, b)| EdgeKey::new(a, b, directed) != key);
        if let Some(list) = self.adjacency.get_mut(key.from()) {
            list.retain(|n| n != key.to());
        }
        if !directed {
            if let Some(list) = self.adjacency.get_mut(key.to()) {
                list.retain(|n| n != key.from());
            }
        }
        Ok(())
    }
}
