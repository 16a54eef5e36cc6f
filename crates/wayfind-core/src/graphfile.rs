//! Graph file loading for wayfind
//!
//! Graphs are described in TOML (default) or JSON, selected by file
//! extension:
//!
//! ```toml
//! directed = true
//! vertices = [0, 1, 2]
//!
//! [[edges]]
//! from = 0
//! to = 1
//! weight = 2.0
//! ```
//!
//! Files are built into a [`Graph`] through the normal mutation API, so
//! loading enforces the same invariants as programmatic construction: a
//! duplicate vertex or an edge naming a missing vertex rejects the file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WayfindError};
use crate::graph::{Graph, VertexId};

/// One edge entry of a graph file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDef {
    pub from: VertexId,
    pub to: VertexId,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// Declarative graph description parsed from a file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphFile {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub vertices: Vec<VertexId>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
}

impl GraphFile {
    /// Read and parse a graph file, dispatching on the file extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| WayfindError::invalid_graph_file(path, e))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&content)
                .map_err(|e| WayfindError::invalid_graph_file(path, e))
        } else {
            toml::from_str(&content).map_err(|e| WayfindError::invalid_graph_file(path, e))
        }
    }

    /// Build the described graph, applying every mutation in file order
    pub fn build(&self) -> Result<Graph> {
        let mut graph = Graph::new(self.directed);
        for &id in &self.vertices {
            graph.add_vertex(id)?;
        }
        for edge in &self.edges {
            graph.add_edge(edge.from, edge.to, edge.weight)?;
        }
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            directed = graph.directed(),
            "graph loaded"
        );
        Ok(graph)
    }
}

/// Load a graph file and build it in one step
pub fn load_graph(path: &Path) -> Result<Graph> {
    GraphFile::load(path)?.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "g.toml",
            r#"
directed = true
vertices = [0, 1, 2]

[[edges]]
from = 0
to = 1
weight = 2.0

[[edges]]
from = 1
to = 2
"#,
        );

        let graph = load_graph(&path).unwrap();
        assert!(graph.directed());
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edges(0)[0].weight, 2.0);
        // Weight defaults to 1.0 when omitted
        assert_eq!(graph.edges(1)[0].weight, 1.0);
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "g.json",
            r#"{"directed": false, "vertices": [1, 2], "edges": [{"from": 1, "to": 2, "weight": 3.5}]}"#,
        );

        let graph = load_graph(&path).unwrap();
        assert!(!graph.directed());
        assert_eq!(graph.edges(2)[0].to, 1);
    }

    #[test]
    fn test_build_rejects_missing_endpoint() {
        let file = GraphFile {
            directed: true,
            vertices: vec![0],
            edges: vec![EdgeDef {
                from: 0,
                to: 5,
                weight: 1.0,
            }],
        };
        let err = file.build().unwrap_err();
        assert!(matches!(err, WayfindError::EndpointMissing { id: 5 }));
    }

    #[test]
    fn test_build_rejects_duplicate_vertex() {
        let file = GraphFile {
            directed: true,
            vertices: vec![3, 3],
            edges: vec![],
        };
        let err = file.build().unwrap_err();
        assert!(matches!(err, WayfindError::AlreadyExists { id: 3 }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GraphFile::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, WayfindError::InvalidGraphFile { .. }));
    }

    #[test]
    fn test_load_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bad.toml", "vertices = \"nope\"");
        let err = GraphFile::load(&path).unwrap_err();
        assert!(matches!(err, WayfindError::InvalidGraphFile { .. }));
    }
}
