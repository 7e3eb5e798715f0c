//! CLI entry point for the `lgraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use listgraph::cli::commands;
use listgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "lgraph",
    about = "lgraph: build an undirected weighted graph and query it"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Connection as FROM,TO,LABEL,WEIGHT (repeatable)
    #[arg(long = "edge", global = true)]
    edges: Vec<String>,

    /// Standalone node with no connections (repeatable)
    #[arg(long = "node", global = true)]
    nodes: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every node and its outgoing edges
    Show,
    /// Node and connection counts
    Stats,
    /// Check whether TO is reachable from FROM
    Reach {
        /// Start node
        from: String,
        /// Target node
        to: String,
    },
    /// Find a path from FROM to TO (depth-first, not shortest)
    Path {
        /// Start node
        from: String,
        /// Target node
        to: String,
    },
    /// List the connections of a node
    Neighbors {
        /// Node name
        node: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = commands::build_graph(&cli.nodes, &cli.edges).and_then(|graph| {
        match cli.command {
            Commands::Show => commands::cmd_show(&graph, json),
            Commands::Stats => commands::cmd_stats(&graph, json),
            Commands::Reach { from, to } => commands::cmd_reach(&graph, &from, &to, json),
            Commands::Path { from, to } => commands::cmd_path(&graph, &from, &to, json),
            Commands::Neighbors { node } => commands::cmd_neighbors(&graph, &node, json),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidArgument(_) => 3,
            GraphError::NodeNotFound(_) => 4,
            GraphError::AlreadyConnected(..) | GraphError::NoSuchEdge(..) => 5,
        };
        process::exit(code);
    }
}
