//! Command dispatch logic for wayfind
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use wayfind_core::error::{Result, WayfindError};
use wayfind_core::graph::Graph;
use wayfind_core::graphfile;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let graph = load_graph(cli)?;

    if cli.verbose {
        eprintln!("load_graph: {:?}", start.elapsed());
    }

    match &cli.command {
        Commands::Path { from, to, weighted } => {
            commands::path::run(cli, &graph, *from, *to, *weighted)
        }
        Commands::Traverse { start } => commands::traverse::run(cli, &graph, *start),
        Commands::Show => commands::show::run(cli, &graph),
    }
}

fn load_graph(cli: &Cli) -> Result<Graph> {
    let path = cli.graph.as_ref().ok_or_else(|| {
        WayfindError::UsageError("no graph file given (use --graph or WAYFIND_GRAPH)".to_string())
    })?;
    graphfile::load_graph(path)
}
