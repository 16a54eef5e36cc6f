//! Path query command: BFS by default, Dijkstra with --weighted

use crate::cli::{Cli, OutputFormat};
use wayfind_core::error::Result;
use wayfind_core::graph::{bfs_path, dijkstra_path, Graph, PathResult, VertexId};

pub fn run(cli: &Cli, graph: &Graph, from: VertexId, to: VertexId, weighted: bool) -> Result<()> {
    let (algorithm, result) = if weighted {
        ("dijkstra", dijkstra_path(graph, from, to))
    } else {
        ("bfs", bfs_path(graph, from, to))
    };

    match cli.format {
        OutputFormat::Json => print_json(algorithm, &result)?,
        OutputFormat::Human => print_human(cli, weighted, &result),
    }

    Ok(())
}

fn print_json(algorithm: &str, result: &PathResult) -> Result<()> {
    let mut value = serde_json::to_value(result)?;
    value["algorithm"] = serde_json::Value::String(algorithm.to_string());
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn print_human(cli: &Cli, weighted: bool, result: &PathResult) {
    if !result.found {
        println!("No path found.");
        return;
    }

    println!("{}", render_vertices(&result.vertices));

    if !cli.quiet {
        if weighted {
            println!("cost: {}", result.cost);
        } else {
            println!("hops: {}", result.path_length);
        }
    }
}

/// Render a vertex sequence as `0 -> 2 -> 4`
pub fn render_vertices(vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
