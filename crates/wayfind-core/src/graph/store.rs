//! Mutable weighted graph storage
//!
//! Vertices are kept in an indexed map from ID to adjacency list rather
//! than the classic linked-list layout, giving O(log V) vertex lookup
//! while keeping enumeration deterministic: vertices enumerate in
//! ascending ID order, edges within a vertex in insertion order.

use std::collections::BTreeMap;

use crate::error::{Result, WayfindError};
use crate::graph::types::{Edge, VertexId};

/// A mutable directed or undirected weighted graph.
///
/// The graph exclusively owns all vertex and edge records; dropping it
/// releases everything, and no handle can outlive it. The
/// `directed` flag is fixed at construction; for an undirected graph
/// every mutation preserves edge symmetry. Parallel edges between the
/// same ordered pair are permitted.
///
/// Exclusive access per operation is the caller's responsibility; the
/// store provides no internal locking.
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    adjacency: BTreeMap<VertexId, Vec<Edge>>,
}

impl Graph {
    /// Create an empty graph
    pub fn new(directed: bool) -> Self {
        Graph {
            directed,
            adjacency: BTreeMap::new(),
        }
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of stored arcs. Undirected edges count twice, once
    /// per direction.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Vertex IDs in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Outgoing edges of `id` in insertion order; empty if `id` is absent
    pub fn edges(&self, id: VertexId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Add a vertex with no edges.
    ///
    /// Fails with `AlreadyExists` if `id` is already present, leaving
    /// the graph unchanged.
    pub fn add_vertex(&mut self, id: VertexId) -> Result<()> {
        if self.adjacency.contains_key(&id) {
            return Err(WayfindError::AlreadyExists { id });
        }
        self.adjacency.insert(id, Vec::new());
        Ok(())
    }

    /// Remove a vertex together with every edge incident to it.
    ///
    /// Incoming edges are dropped by scanning all remaining adjacency
    /// lists, so removal is O(V+E). Fails with `VertexNotFound` if `id`
    /// is absent.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<()> {
        if self.adjacency.remove(&id).is_none() {
            return Err(WayfindError::VertexNotFound { id });
        }
        for edges in self.adjacency.values_mut() {
            edges.retain(|edge| edge.to != id);
        }
        tracing::trace!(vertex = id, "removed vertex and incident edges");
        Ok(())
    }

    /// Add an arc `src -> dst` with the given weight.
    ///
    /// Both endpoints must already exist; there is no implicit vertex
    /// creation. On an undirected graph the mirror arc `dst -> src` is
    /// inserted as well. Insertion is not deduplicated.
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId, weight: f64) -> Result<()> {
        self.require_vertex(src)?;
        self.require_vertex(dst)?;

        if let Some(edges) = self.adjacency.get_mut(&src) {
            edges.push(Edge::new(dst, weight));
        }
        if !self.directed {
            if let Some(edges) = self.adjacency.get_mut(&dst) {
                edges.push(Edge::new(src, weight));
            }
        }
        Ok(())
    }

    /// Remove the first matching arc `src -> dst`, and on an undirected
    /// graph the first matching mirror `dst -> src`.
    ///
    /// Removing a non-existent edge is a no-op; only a missing endpoint
    /// vertex is an error.
    pub fn remove_edge(&mut self, src: VertexId, dst: VertexId) -> Result<()> {
        self.require_vertex(src)?;
        self.require_vertex(dst)?;

        self.remove_first_arc(src, dst);
        if !self.directed {
            self.remove_first_arc(dst, src);
        }
        Ok(())
    }

    fn remove_first_arc(&mut self, src: VertexId, dst: VertexId) {
        if let Some(edges) = self.adjacency.get_mut(&src) {
            if let Some(pos) = edges.iter().position(|edge| edge.to == dst) {
                edges.remove(pos);
            }
        }
    }

    fn require_vertex(&self, id: VertexId) -> Result<()> {
        if self.adjacency.contains_key(&id) {
            Ok(())
        } else {
            Err(WayfindError::EndpointMissing { id })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_duplicate() {
        let mut graph = Graph::new(true);
        graph.add_vertex(1).unwrap();
        let err = graph.add_vertex(1).unwrap_err();
        assert!(matches!(err, WayfindError::AlreadyExists { id: 1 }));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_add_edge_missing_endpoint() {
        let mut graph = Graph::new(true);
        graph.add_vertex(0).unwrap();
        let err = graph.add_edge(0, 1, 1.0).unwrap_err();
        assert!(matches!(err, WayfindError::EndpointMissing { id: 1 }));
        assert_eq!(graph.edge_count(), 0);

        let err = graph.add_edge(2, 0, 1.0).unwrap_err();
        assert!(matches!(err, WayfindError::EndpointMissing { id: 2 }));
    }

    #[test]
    fn test_undirected_mirror_insertion() {
        let mut graph = Graph::new(false);
        graph.add_vertex(1).unwrap();
        graph.add_vertex(2).unwrap();
        graph.add_edge(1, 2, 4.5).unwrap();

        assert_eq!(graph.edges(1), &[Edge::new(2, 4.5)]);
        assert_eq!(graph.edges(2), &[Edge::new(1, 4.5)]);
    }

    #[test]
    fn test_undirected_mirror_removal() {
        let mut graph = Graph::new(false);
        graph.add_vertex(1).unwrap();
        graph.add_vertex(2).unwrap();
        graph.add_edge(1, 2, 4.5).unwrap();
        graph.remove_edge(1, 2).unwrap();

        assert!(graph.edges(1).is_empty());
        assert!(graph.edges(2).is_empty());
    }

    #[test]
    fn test_remove_edge_missing_is_noop() {
        let mut graph = Graph::new(true);
        graph.add_vertex(0).unwrap();
        graph.add_vertex(1).unwrap();
        graph.remove_edge(0, 1).unwrap();

        let err = graph.remove_edge(0, 5).unwrap_err();
        assert!(matches!(err, WayfindError::EndpointMissing { id: 5 }));
    }

    #[test]
    fn test_remove_edge_parallel_removes_first_only() {
        let mut graph = Graph::new(true);
        graph.add_vertex(0).unwrap();
        graph.add_vertex(1).unwrap();
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(0, 1, 2.0).unwrap();

        graph.remove_edge(0, 1).unwrap();
        assert_eq!(graph.edges(0), &[Edge::new(1, 2.0)]);
    }

    #[test]
    fn test_remove_vertex_cascades() {
        let mut graph = Graph::new(true);
        for id in 0..3 {
            graph.add_vertex(id).unwrap();
        }
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(2, 1, 1.0).unwrap();
        graph.add_edge(2, 1, 3.0).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();

        graph.remove_vertex(1).unwrap();

        assert!(!graph.contains_vertex(1));
        assert!(graph.edges(0).is_empty());
        assert!(graph.edges(2).is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_vertex_not_found() {
        let mut graph = Graph::new(true);
        let err = graph.remove_vertex(8).unwrap_err();
        assert!(matches!(err, WayfindError::VertexNotFound { id: 8 }));
    }

    #[test]
    fn test_vertex_enumeration_ascending() {
        let mut graph = Graph::new(true);
        for id in [5, 1, 9, 3] {
            graph.add_vertex(id).unwrap();
        }
        let ids: Vec<_> = graph.vertices().collect();
        assert_eq!(ids, vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_edge_enumeration_insertion_order() {
        let mut graph = Graph::new(true);
        for id in 0..4 {
            graph.add_vertex(id).unwrap();
        }
        graph.add_edge(0, 3, 1.0).unwrap();
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(0, 2, 1.0).unwrap();

        let destinations: Vec<_> = graph.edges(0).iter().map(|e| e.to).collect();
        assert_eq!(destinations, vec![3, 1, 2]);
    }

    #[test]
    fn test_undirected_self_loop() {
        let mut graph = Graph::new(false);
        graph.add_vertex(0).unwrap();
        graph.add_edge(0, 0, 2.0).unwrap();
        // Forward and mirror arcs both land in the same adjacency list
        assert_eq!(graph.edges(0).len(), 2);

        graph.remove_edge(0, 0).unwrap();
        assert!(graph.edges(0).is_empty());
    }
}
