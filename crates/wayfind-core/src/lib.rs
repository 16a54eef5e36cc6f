//! Wayfind Core Library
//!
//! Graph engine for the wayfind path-finding tool: a mutable weighted
//! directed/undirected graph plus BFS, DFS and Dijkstra queries.

pub mod error;
pub mod format;
pub mod graph;
pub mod graphfile;
pub mod logging;
