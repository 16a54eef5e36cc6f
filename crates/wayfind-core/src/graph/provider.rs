//! Read-only adjacency interface consumed by the query algorithms

use crate::graph::store::Graph;
use crate::graph::types::{Edge, VertexId};

/// Trait for providing graph adjacency to the query algorithms.
///
/// Queries never mutate: they borrow the provider for the duration of a
/// single call and keep all working state (visited sets, parent maps,
/// queues) private to that call.
pub trait GraphProvider {
    /// All vertex IDs, in ascending order
    fn vertex_ids(&self) -> Vec<VertexId>;

    /// Outgoing edges of `id` in insertion order; empty if `id` is absent
    fn outbound_edges(&self, id: VertexId) -> Vec<Edge>;

    /// Whether `id` is currently a vertex of the graph
    fn contains_vertex(&self, id: VertexId) -> bool;
}

impl GraphProvider for Graph {
    fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices().collect()
    }

    fn outbound_edges(&self, id: VertexId) -> Vec<Edge> {
        self.edges(id).to_vec()
    }

    fn contains_vertex(&self, id: VertexId) -> bool {
        self.contains_vertex(id)
    }
}
