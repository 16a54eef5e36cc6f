//! Adjacency dump command

use crate::cli::{Cli, OutputFormat};
use wayfind_core::error::Result;
use wayfind_core::graph::Graph;

pub fn run(cli: &Cli, graph: &Graph) -> Result<()> {
    match cli.format {
        OutputFormat::Json => print_json(graph)?,
        OutputFormat::Human => print_human(cli, graph),
    }
    Ok(())
}

fn print_json(graph: &Graph) -> Result<()> {
    let vertices: Vec<serde_json::Value> = graph
        .vertices()
        .map(|id| {
            serde_json::json!({
                "id": id,
                "edges": graph.edges(id),
            })
        })
        .collect();

    let value = serde_json::json!({
        "directed": graph.directed(),
        "vertex_count": graph.vertex_count(),
        "edge_count": graph.edge_count(),
        "vertices": vertices,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn print_human(cli: &Cli, graph: &Graph) {
    if !cli.quiet {
        println!(
            "{} graph: {} vertices, {} edges",
            if graph.directed() {
                "directed"
            } else {
                "undirected"
            },
            graph.vertex_count(),
            graph.edge_count(),
        );
    }

    for id in graph.vertices() {
        let edges: Vec<String> = graph
            .edges(id)
            .iter()
            .map(|edge| format!("-> {} (w={})", edge.to, edge.weight))
            .collect();
        println!("vertex {}: {}", id, edges.join(" "));
    }
}
