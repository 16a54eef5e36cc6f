//! Dijkstra shortest path by edge weight
//!
//! Non-negative weights are a precondition, not a runtime check:
//! negative weights produce incorrect results, as in the classical
//! algorithm.

use std::collections::{HashMap, HashSet};

use crate::graph::algos::path::reconstruct_path;
use crate::graph::provider::GraphProvider;
use crate::graph::types::{PathResult, VertexId};

/// Select the unsettled vertex with minimum tentative distance.
///
/// Linear scan in ascending vertex-ID order with a `<=` comparison, so
/// among equal distances the highest-numbered vertex wins. That
/// tie-break is part of the contract: enumeration must stay reproducible
/// for a given insertion sequence. Vertices still at infinity are never
/// selected.
fn min_distance(
    ids: &[VertexId],
    dist: &HashMap<VertexId, f64>,
    settled: &HashSet<VertexId>,
) -> Option<VertexId> {
    let mut min = f64::INFINITY;
    let mut min_id = None;

    for &v in ids {
        if settled.contains(&v) {
            continue;
        }
        let d = dist[&v];
        if d.is_finite() && d <= min {
            min = d;
            min_id = Some(v);
        }
    }
    min_id
}

/// Find the minimum-weight path from `from` to `to`.
///
/// O(V²) relaxation loop without a priority queue: repeatedly settle the
/// unsettled vertex with the smallest tentative distance, stop early
/// when `to` is selected or no reachable vertex remains, and relax every
/// outgoing edge into unsettled vertices. The scale this engine targets
/// (small-to-moderate static graphs) does not justify a heap.
///
/// A missing endpoint, an empty graph and an unreachable target all
/// yield a not-found result. If `from == to` the path is `[from]` with
/// cost 0.
#[tracing::instrument(skip(graph), fields(from = from, to = to))]
pub fn dijkstra_path(graph: &dyn GraphProvider, from: VertexId, to: VertexId) -> PathResult {
    if !graph.contains_vertex(from) || !graph.contains_vertex(to) {
        return PathResult::not_found(from, to);
    }

    let ids = graph.vertex_ids();
    let mut dist: HashMap<VertexId, f64> =
        ids.iter().map(|&id| (id, f64::INFINITY)).collect();
    let mut parents: HashMap<VertexId, VertexId> = HashMap::new();
    let mut settled: HashSet<VertexId> = HashSet::new();

    dist.insert(from, 0.0);

    for _ in 0..ids.len() {
        let Some(u) = min_distance(&ids, &dist, &settled) else {
            break;
        };
        if u == to {
            break;
        }
        settled.insert(u);

        let du = dist[&u];
        for edge in graph.outbound_edges(u) {
            if settled.contains(&edge.to) {
                continue;
            }
            let candidate = du + edge.weight;
            if candidate < dist[&edge.to] {
                dist.insert(edge.to, candidate);
                parents.insert(edge.to, u);
            }
        }
    }

    if !parents.contains_key(&to) && from != to {
        tracing::debug!(settled = settled.len(), "target unreachable");
        return PathResult::not_found(from, to);
    }

    let vertices = reconstruct_path(&parents, from, to);
    let cost = dist[&to];
    PathResult::found(from, to, vertices, cost)
}
