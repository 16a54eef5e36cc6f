//! Graph storage and path-finding operations
//!
//! Provides the mutable weighted graph and its query algorithms:
//! - BFS shortest path by hop count
//! - DFS reachability order
//! - Dijkstra shortest path by edge weight
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod provider;
pub mod store;
pub mod types;

pub use algos::{bfs_path, dfs_order, dijkstra_path};
pub use provider::GraphProvider;
pub use store::Graph;
pub use types::{Edge, PathResult, TraversalOrder, VertexId};
