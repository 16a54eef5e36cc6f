//! Graph query algorithm implementations
//!
//! Contains concrete implementations of the graph queries:
//! - `bfs`: Shortest path by hop count
//! - `dfs`: Full reachability order
//! - `dijkstra`: Shortest path by edge weight
//! - `path`: Parent-map path reconstruction shared by bfs and dijkstra

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod path;

pub use bfs::bfs_path;
pub use dfs::dfs_order;
pub use dijkstra::dijkstra_path;
