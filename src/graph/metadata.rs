//! String metadata on graphs, vertices and edges.

use super::AttributedGraph;
use crate::error::{Error, Result};
use crate::geometry::Point2D;
use std::collections::BTreeMap;
use tracing::trace;

/// Case-sensitive key/value dictionary; iterates in key order.
pub type Metadata = BTreeMap<String, String>;

/// Vertex metadatum holding the vertex's own text form, e.g. `"3/4,-2"`.
pub const VERTEX_LOCATION_KEY: &str = "xy";

/// Edge metadatum recording the edge's dual as `"p1;p2"`.
pub const DUAL_EDGE_KEY: &str = "dual";

/// Keys that callers may read but never set or unset.
pub const RESERVED_METADATA_KEYS: &[&str] = &[VERTEX_LOCATION_KEY];

/// True if `key` is maintained by the graph itself.
pub fn is_reserved_metadata_key(key: &str) -> bool {
    RESERVED_METADATA_KEYS.contains(&key)
}

fn require_writable(key: &str) -> Result<()> {
    if is_reserved_metadata_key(key) {
        Err(Error::ReservedKey(key.to_string()))
    } else {
        Ok(())
    }
}

impl AttributedGraph {
    // ------------------------------------------------------------------
    // Graph
    // ------------------------------------------------------------------

    pub fn graph_metadata(&self) -> &Metadata {
        &self.graph_metadata
    }

    pub fn graph_metadatum(&self, key: &str) -> Option<&str> {
        self.graph_metadata.get(key).map(String::as_str)
    }

    pub fn set_graph_metadatum(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.graph_metadata.insert(key.into(), value.into());
    }

    /// Removes the key, returning its previous value.
    pub fn unset_graph_metadatum(&mut self, key: &str) -> Option<String> {
        self.graph_metadata.remove(key)
    }

    // ------------------------------------------------------------------
    // Vertices
    // ------------------------------------------------------------------

    /// All metadata of `vertex`, including the reserved location key.
    pub fn vertex_metadata(&self, vertex: &Point2D) -> Result<&Metadata> {
        self.vertex_metadata
            .get(vertex)
            .ok_or_else(|| Error::UnknownVertex(vertex.clone()))
    }

    /// The value under `key`, or `None` when the vertex lacks it.
    pub fn vertex_metadatum(&self, vertex: &Point2D, key: &str) -> Result<Option<&str>> {
        Ok(self.vertex_metadata(vertex)?.get(key).map(String::as_str))
    }

    /// Fails with [`Error::UnknownVertex`] or [`Error::ReservedKey`] without mutating.
    pub fn set_vertex_metadatum(
        &mut self,
        vertex: &Point2D,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        let key = key.into();
        self.require_vertex(vertex)?;
        require_writable(&key)?;
        let value = value.into();
        trace!(vertex = %vertex, key = %key, value = %value, "set vertex metadatum");
        if let Some(metadata) = self.vertex_metadata.get_mut(vertex) {
            metadata.insert(key, value);
        }
        Ok(())
    }

    /// Removes `key` from `vertex`, returning its previous value.
    pub fn unset_vertex_metadatum(&mut self, vertex: &Point2D, key: &str) -> Result<Option<String>> {
        self.require_vertex(vertex)?;
        require_writable(key)?;
        trace!(vertex = %vertex, key, "unset vertex metadatum");
        Ok(self
            .vertex_metadata
            .get_mut(vertex)
            .and_then(|metadata| metadata.remove(key)))
    }

    // ------------------------------------------------------------------
    // Edges
    // ------------------------------------------------------------------

    /// All metadata of the edge; orientation is ignored in undirected graphs.
    pub fn edge_metadata(&self, from: &Point2D, to: &Point2D) -> Result<&Metadata> {
        let key = self.require_edge(from, to)?;
        self.edge_metadata
            .get(&key)
            .ok_or_else(|| Error::UnknownEdge(from.clone(), to.clone()))
    }

    pub fn edge_metadatum(&self, from: &Point2D, to: &Point2D, key: &str) -> Result<Option<&str>> {
        Ok(self.edge_metadata(from, to)?.get(key).map(String::as_str))
    }

    /// Fails with [`Error::UnknownEdge`] or [`Error::ReservedKey`] without mutating.
    pub fn set_edge_metadatum(
        &mut self,
        from: &Point2D,
        to: &Point2D,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        let key = key.into();
        let edge = self.require_edge(from, to)?;
        require_writable(&key)?;
        let value = value.into();
        trace!(from = %from, to = %to, key = %key, value = %value, "set edge metadatum");
        if let Some(metadata) = self.edge_metadata.get_mut(&edge) {
            metadata.insert(key, value);
        }
        Ok(())
    }

    pub fn unset_edge_metadatum(
        &mut self,
        from: &Point2D,
        to: &Point2D,
        key: &str,
    ) -> Result<Option<String>> {
        let edge = self.require_edge(from, to)?;
        require_writable(key)?;
        trace!(from = %from, to = %to, key, "unset edge metadatum");
        Ok(self
            .edge_metadata
            .get_mut(&edge)
            .and_then(|metadata| metadata.remove(key)))
    }

    // ------------------------------------------------------------------
    // Dual edges
    // ------------------------------------------------------------------

    /// Records `(dual_from, dual_to)` as the dual of the edge.
    pub fn set_dual_edge(
        &mut self,
        from: &Point2D,
        to: &Point2D,
        dual_from: &Point2D,
        dual_to: &Point2D,
    ) -> Result<()> {
        self.set_edge_metadatum(from, to, DUAL_EDGE_KEY, format!("{};{}", dual_from, dual_to))
    }

    /// The recorded dual of the edge, or `None` if there is none.
    ///
    /// Fails with [`Error::MalformedInput`] if the record is not two points.
    pub fn dual_edge(&self, from: &Point2D, to: &Point2D) -> Result<Option<(Point2D, Point2D)>> {
        let Some(record) = self.edge_metadatum(from, to, DUAL_EDGE_KEY)? else {
            return Ok(None);
        };
        match record.split(';').collect::<Vec<_>>().as_slice() {
            [a, b] => Ok(Some((a.parse()?, b.parse()?))),
            tokens => Err(Error::malformed(format!(
                "dual edge record {:?} has {} points, expected 2",
                record,
                tokens.len()
            ))),
        }
    }

    pub fn unset_dual_edge(&mut self, from: &Point2D, to: &Point2D) -> Result<()> {
        self.unset_edge_metadatum(from, to, DUAL_EDGE_KEY)?;
        Ok(())
    }

    /// Fresh metadata for a vertex at `vertex`.
    pub(super) fn initial_vertex_metadata(vertex: &Point2D) -> Metadata {
        let mut metadata = Metadata::new();
        metadata.insert(VERTEX_LOCATION_KEY.to_string(), vertex.to_string());
        metadata
    }
}
