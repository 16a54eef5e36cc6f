//! Path reconstruction from per-vertex parent pointers

use std::collections::HashMap;

use crate::graph::types::VertexId;

/// Walk parent pointers from `to` back to `from` and return the path in
/// forward order, both endpoints inclusive.
///
/// Callers only invoke this after the search reported `to` as reached,
/// so the parent chain is expected to terminate at `from`; a gap in the
/// map ends the walk rather than panicking.
pub fn reconstruct_path(
    parents: &HashMap<VertexId, VertexId>,
    from: VertexId,
    to: VertexId,
) -> Vec<VertexId> {
    let mut path = vec![to];
    let mut current = to;

    while current != from {
        match parents.get(&current) {
            Some(&pred) => {
                current = pred;
                path.push(pred);
            }
            None => break,
        }
    }

    path.reverse();
    path
}
