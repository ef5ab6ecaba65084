//! CLI entry point for the `pgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use pathgraph::cli::commands;
use pathgraph::{Config, ErrorKind};

#[derive(Parser)]
#[command(
    name = "pgraph",
    about = "pathgraph CLI: edit weighted graphs and search for shortest paths"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty graph document
    Create {
        /// Path to the graph document to create
        file: PathBuf,
    },
    /// Display information about a graph document
    Info {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Add a vertex at a position
    AddVertex {
        /// Path to the graph document
        file: PathBuf,
        /// X coordinate
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// Y coordinate
        #[arg(allow_negative_numbers = true)]
        y: f64,
        /// Reuse a vertex already within the snap threshold
        #[arg(long)]
        snap: bool,
    },
    /// Add an edge between two vertices
    Link {
        /// Path to the graph document
        file: PathBuf,
        /// First vertex ID
        vertex_one: u64,
        /// Second vertex ID
        vertex_two: u64,
        /// Edge weight (defaults to the segment length)
        #[arg(long)]
        distance: Option<f64>,
    },
    /// Remove the edges between two vertices
    Unlink {
        /// Path to the graph document
        file: PathBuf,
        /// First vertex ID
        vertex_one: u64,
        /// Second vertex ID
        vertex_two: u64,
    },
    /// Remove a vertex and its edges
    RemoveVertex {
        /// Path to the graph document
        file: PathBuf,
        /// Vertex ID
        vertex_id: u64,
    },
    /// Find the vertex near a position
    Find {
        /// Path to the graph document
        file: PathBuf,
        /// X coordinate
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// Y coordinate
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Search for the shortest path between two vertices
    Traverse {
        /// Path to the graph document
        file: PathBuf,
        /// Source vertex ID
        from: u64,
        /// Target vertex ID
        to: u64,
    },
    /// Render the graph as SVG
    Render {
        /// Path to the graph document
        file: PathBuf,
        /// Write the SVG here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Highlight the path starting at this vertex
        #[arg(long, requires = "to")]
        from: Option<u64>,
        /// Highlight the path ending at this vertex
        #[arg(long, requires = "from")]
        to: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    let _ = logger.try_init();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(2);
            }
        },
        None => Config::load_or_default(),
    };

    let result = match cli.command {
        Commands::Create { file } => commands::cmd_create(&file, &config),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::AddVertex { file, x, y, snap } => {
            commands::cmd_add_vertex(&file, x, y, snap, json)
        }
        Commands::Link {
            file,
            vertex_one,
            vertex_two,
            distance,
        } => commands::cmd_link(&file, vertex_one, vertex_two, distance, json),
        Commands::Unlink {
            file,
            vertex_one,
            vertex_two,
        } => commands::cmd_unlink(&file, vertex_one, vertex_two, json),
        Commands::RemoveVertex { file, vertex_id } => {
            commands::cmd_remove_vertex(&file, vertex_id, json)
        }
        Commands::Find { file, x, y } => commands::cmd_find(&file, x, y, json),
        Commands::Traverse { file, from, to } => commands::cmd_traverse(&file, from, to, json),
        Commands::Render {
            file,
            output,
            from,
            to,
        } => {
            let route = from.zip(to);
            commands::cmd_render(&file, output.as_deref(), route, &config)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match e.kind() {
            ErrorKind::Io => 1,
            ErrorKind::Format => 2,
            ErrorKind::InvalidArgument => 3,
            ErrorKind::NotFound => 4,
        };
        process::exit(code);
    }
}
