use std::error::Error;

use clap::Args;
use gm_graph::{bfs_distances, distance_distribution, to_json};
use gm_store::GraphLibrary;
use serde_json::json;

use super::require_graph;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Stored graph name.
    pub name: String,
}

#[derive(Args, Debug)]
pub struct DistancesArgs {
    /// Stored graph name.
    pub name: String,
    /// Identifier of the start vertex.
    #[arg(long)]
    pub start: String,
}

pub fn list(library: &GraphLibrary) -> Result<(), Box<dyn Error>> {
    for summary in library.summaries()? {
        println!(
            "{:<24} {:>6} {:>6}  {}",
            summary.name,
            summary.vertex_count,
            summary.edge_count,
            &summary.digest[..12.min(summary.digest.len())]
        );
    }
    Ok(())
}

pub fn show(library: &GraphLibrary, args: &ShowArgs) -> Result<(), Box<dyn Error>> {
    let Some(document) = library.load_document(&args.name)? else {
        return Err(format!("no graph named {}", args.name).into());
    };
    println!("{}", to_json(&document)?);
    Ok(())
}

pub fn distances(
    library: &GraphLibrary,
    seed: Option<u64>,
    args: &DistancesArgs,
) -> Result<(), Box<dyn Error>> {
    let graph = require_graph(library, &args.name, seed)?;
    let distances = bfs_distances(&graph, &args.start)?;
    let histogram = distance_distribution(&graph, &args.start)?;
    let report = json!({
        "graph": args.name,
        "start": args.start,
        "distances": distances,
        "histogram": histogram,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
