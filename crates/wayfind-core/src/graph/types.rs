//! Shared types for graph storage and queries

use serde::{Deserialize, Serialize};

/// Identifier of a graph vertex, unique within a graph
pub type VertexId = u32;

/// A directed weighted arc, owned by its source vertex.
///
/// Only the destination is stored; the source is implied by which
/// adjacency list the edge lives in. Weights may be negative in the
/// store itself, but Dijkstra assumes non-negative weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub to: VertexId,
    pub weight: f64,
}

impl Edge {
    pub fn new(to: VertexId, weight: f64) -> Self {
        Edge { to, weight }
    }
}

/// Result of a point-to-point path query (BFS or Dijkstra).
///
/// On a not-found outcome `vertices` is empty, `path_length` is zero and
/// `cost` is zero; no partial path is ever surfaced.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: VertexId,
    pub to: VertexId,
    pub found: bool,
    /// Vertex IDs from `from` to `to` inclusive
    pub vertices: Vec<VertexId>,
    /// Number of edges on the path
    pub path_length: usize,
    /// Total cost: summed edge weights for Dijkstra, hop count for BFS
    pub cost: f64,
}

impl PathResult {
    /// Build a successful result from a reconstructed vertex sequence
    pub fn found(from: VertexId, to: VertexId, vertices: Vec<VertexId>, cost: f64) -> Self {
        let path_length = vertices.len().saturating_sub(1);
        PathResult {
            from,
            to,
            found: true,
            vertices,
            path_length,
            cost,
        }
    }

    /// Build an empty not-found result
    pub fn not_found(from: VertexId, to: VertexId) -> Self {
        PathResult {
            from,
            to,
            found: false,
            vertices: Vec::new(),
            path_length: 0,
            cost: 0.0,
        }
    }
}

/// Result of a DFS reachability query: every vertex reachable from
/// `root`, each visited exactly once, in discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalOrder {
    pub root: VertexId,
    pub vertices: Vec<VertexId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_result_found() {
        let result = PathResult::found(0, 4, vec![0, 2, 4], 7.0);
        assert!(result.found);
        assert_eq!(result.path_length, 2);
        assert_eq!(result.cost, 7.0);
    }

    #[test]
    fn test_path_result_single_vertex() {
        let result = PathResult::found(3, 3, vec![3], 0.0);
        assert!(result.found);
        assert_eq!(result.path_length, 0);
        assert_eq!(result.vertices, vec![3]);
    }

    #[test]
    fn test_path_result_not_found_is_empty() {
        let result = PathResult::not_found(1, 9);
        assert!(!result.found);
        assert!(result.vertices.is_empty());
        assert_eq!(result.path_length, 0);
        assert_eq!(result.cost, 0.0);
    }
}
