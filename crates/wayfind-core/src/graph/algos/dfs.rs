//! Depth-first reachability order

use std::collections::HashSet;

use crate::graph::provider::GraphProvider;
use crate::graph::types::{TraversalOrder, VertexId};

/// Visit every vertex reachable from `root` exactly once, in the order a
/// recursive depth-first descent would discover them.
///
/// Implemented with an explicit stack so traversal depth is bounded by
/// heap allocation rather than the call stack. Children are pushed in
/// reverse enumeration order, which makes the pop order match the
/// recursive formulation exactly. Parallel edges are separate traversal
/// opportunities, but the visited set keeps each vertex in the order
/// only once.
///
/// An absent `root` (including the empty graph) yields an empty order,
/// not an error.
#[tracing::instrument(skip(graph), fields(root = root))]
pub fn dfs_order(graph: &dyn GraphProvider, root: VertexId) -> TraversalOrder {
    let mut vertices = Vec::new();

    if graph.contains_vertex(root) {
        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut stack = vec![root];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            vertices.push(current);

            let edges = graph.outbound_edges(current);
            for edge in edges.iter().rev() {
                if !visited.contains(&edge.to) {
                    stack.push(edge.to);
                }
            }
        }
    }

    tracing::debug!(visited = vertices.len(), "traversal complete");
    TraversalOrder { root, vertices }
}
