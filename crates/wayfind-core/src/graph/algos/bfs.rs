//! Breadth-first shortest path by hop count

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::algos::path::reconstruct_path;
use crate::graph::provider::GraphProvider;
use crate::graph::types::{PathResult, VertexId};

/// Find the path with the fewest edges from `from` to `to`.
///
/// Level-order exploration: each discovered vertex records the vertex it
/// was first reached from, and the parent chain is walked back from `to`
/// once the target is dequeued. Because vertices are visited in
/// non-decreasing hop distance, the reconstructed path has the minimum
/// possible number of edges.
///
/// A missing `from` or `to` vertex, an empty graph and an unreachable
/// target all yield a not-found result rather than an error. If
/// `from == to` the path is the single-element sequence `[from]`.
#[tracing::instrument(skip(graph), fields(from = from, to = to))]
pub fn bfs_path(graph: &dyn GraphProvider, from: VertexId, to: VertexId) -> PathResult {
    if !graph.contains_vertex(from) || !graph.contains_vertex(to) {
        return PathResult::not_found(from, to);
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut parents: HashMap<VertexId, VertexId> = HashMap::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    visited.insert(from);
    queue.push_back(from);

    let mut found = false;
    while let Some(current) = queue.pop_front() {
        if current == to {
            found = true;
            break;
        }

        for edge in graph.outbound_edges(current) {
            if visited.insert(edge.to) {
                parents.insert(edge.to, current);
                queue.push_back(edge.to);
            }
        }
    }

    if !found {
        tracing::debug!(visited = visited.len(), "target unreachable");
        return PathResult::not_found(from, to);
    }

    let vertices = reconstruct_path(&parents, from, to);
    let hops = vertices.len().saturating_sub(1) as f64;
    PathResult::found(from, to, vertices, hops)
}
