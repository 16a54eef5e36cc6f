//! Depth-first traversal command

use crate::cli::{Cli, OutputFormat};
use crate::commands::path::render_vertices;
use wayfind_core::error::Result;
use wayfind_core::graph::{dfs_order, Graph, VertexId};

pub fn run(cli: &Cli, graph: &Graph, start: VertexId) -> Result<()> {
    let order = dfs_order(graph, start);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&order)?);
        }
        OutputFormat::Human => {
            if order.vertices.is_empty() {
                println!("No vertices reachable.");
            } else {
                println!("{}", render_vertices(&order.vertices));
                if !cli.quiet {
                    println!("visited: {}", order.vertices.len());
                }
            }
        }
    }

    Ok(())
}
