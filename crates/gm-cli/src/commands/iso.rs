use std::error::Error;

use clap::Args;
use gm_iso::{find_isomorphism, IsoOptions};
use gm_store::GraphLibrary;

use super::require_graph;

#[derive(Args, Debug)]
pub struct IsoArgs {
    /// First stored graph.
    pub first: String,
    /// Second stored graph.
    pub second: String,
    /// Maximum number of permutations to examine.
    #[arg(long)]
    pub budget: Option<u64>,
}

pub fn run(
    library: &GraphLibrary,
    seed: Option<u64>,
    args: &IsoArgs,
) -> Result<(), Box<dyn Error>> {
    let g1 = require_graph(library, &args.first, seed)?;
    let g2 = require_graph(library, &args.second, seed)?;
    let opts = IsoOptions {
        step_budget: args.budget,
    };
    match find_isomorphism(&g1, &g2, &opts)? {
        Some(mapping) => {
            println!("isomorphic");
            println!("{}", serde_json::to_string_pretty(&mapping)?);
        }
        None => println!("not isomorphic"),
    }
    Ok(())
}
