//! CLI argument parsing for wayfind
//!
//! Supports global flags: --graph, --format, --quiet, --verbose,
//! --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use wayfind_core::format::OutputFormat;
use wayfind_core::graph::VertexId;

/// Wayfind - graph path-finding CLI
///
/// Loads a weighted graph from a TOML or JSON file and answers
/// shortest-path and reachability queries over it.
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph description file (TOML or JSON)
    #[arg(long, short, global = true, env = "WAYFIND_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a path between two vertices
    Path {
        /// Start vertex ID
        from: VertexId,

        /// Target vertex ID
        to: VertexId,

        /// Minimize total edge weight (Dijkstra) instead of hop count (BFS)
        #[arg(long, short)]
        weighted: bool,
    },

    /// List every vertex reachable from a start vertex in depth-first order
    Traverse {
        /// Start vertex ID
        start: VertexId,
    },

    /// Print the adjacency structure of the loaded graph
    Show,
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
