use std::error::Error;

use clap::Args;
use gm_graph::{cartesian_product, line_graph, Graph};
use gm_store::GraphLibrary;

use super::require_graph;

#[derive(Args, Debug)]
pub struct LineGraphArgs {
    /// Stored source graph.
    pub name: String,
    /// Name the line graph is stored under.
    #[arg(long)]
    pub out: String,
}

#[derive(Args, Debug)]
pub struct ProductArgs {
    /// Left factor.
    pub first: String,
    /// Right factor.
    pub second: String,
    /// Name the product is stored under.
    #[arg(long)]
    pub out: String,
}

pub fn line(
    library: &GraphLibrary,
    seed: Option<u64>,
    args: &LineGraphArgs,
) -> Result<(), Box<dyn Error>> {
    let source = require_graph(library, &args.name, seed)?;
    let derived = line_graph(&source)?;
    store(library, &args.out, &derived)
}

pub fn product(
    library: &GraphLibrary,
    seed: Option<u64>,
    args: &ProductArgs,
) -> Result<(), Box<dyn Error>> {
    let g1 = require_graph(library, &args.first, seed)?;
    let g2 = require_graph(library, &args.second, seed)?;
    let derived = cartesian_product(&g1, &g2)?;
    store(library, &args.out, &derived)
}

fn store(library: &GraphLibrary, name: &str, graph: &Graph) -> Result<(), Box<dyn Error>> {
    let path = library.save(name, graph)?;
    println!(
        "{} [{}] ({} vertices, {} edges) -> {}",
        name,
        graph.name(),
        graph.len(),
        graph.edge_count(),
        path.display()
    );
    Ok(())
}
