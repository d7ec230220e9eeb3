use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::{
    derive::{self, LineGraphArgs, ProductArgs},
    generate::{self, GenerateArgs},
    inspect::{self, DistancesArgs, ShowArgs},
    iso::{self, IsoArgs},
};
use gm_store::{GraphLibrary, LibraryConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "graphematics", about = "Small combinatorial graph toolkit")]
struct Cli {
    /// Directory holding the stored graph documents.
    #[arg(long, global = true, default_value = "storage/graphs")]
    library: PathBuf,
    /// Seed for generated vertex identifiers.
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Raise log verbosity (repeat for more).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a graph from a named family and store it.
    Generate(GenerateArgs),
    /// List stored graphs with their statistics.
    List,
    /// Print a stored graph document.
    Show(ShowArgs),
    /// Breadth-first distances from a start vertex.
    Distances(DistancesArgs),
    /// Search for an isomorphism between two stored graphs.
    Iso(IsoArgs),
    /// Store the line graph of a stored graph.
    LineGraph(LineGraphArgs),
    /// Store the Cartesian product of two stored graphs.
    Product(ProductArgs),
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let library = GraphLibrary::open(LibraryConfig::new(cli.library.clone()))?;
    info!(command = ?cli.command, library = %cli.library.display(), "dispatching command");

    match &cli.command {
        Command::Generate(args) => generate::run(&library, cli.seed, args),
        Command::List => inspect::list(&library),
        Command::Show(args) => inspect::show(&library, args),
        Command::Distances(args) => inspect::distances(&library, cli.seed, args),
        Command::Iso(args) => iso::run(&library, cli.seed, args),
        Command::LineGraph(args) => derive::line(&library, cli.seed, args),
        Command::Product(args) => derive::product(&library, cli.seed, args),
    }
}
